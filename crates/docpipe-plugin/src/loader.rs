//! Dynamic plugin loader using `libloading` (feature-gated).

use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
use std::path::{Path, PathBuf};

/// Returns the platform file name of the plugin library `name`
/// (`libname.so`, `name.dll`, `libname.dylib`).
pub fn library_file_name(name: &str) -> String {
    format!("{DLL_PREFIX}{name}{DLL_SUFFIX}")
}

/// Returns `path` if it exists, otherwise `path` with the platform library
/// prefix and suffix applied to its file name.
pub fn locate_library(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }

    let stem = path.file_name()?.to_str()?;
    let candidate = path.with_file_name(library_file_name(stem));
    candidate.is_file().then_some(candidate)
}

#[cfg(feature = "dynamic")]
pub mod dynamic_loader {
    use std::path::Path;
    use std::sync::Arc;

    use tracing::info;

    use crate::traits::Plugin;
    use docpipe_core::error::{AppError, ErrorKind};

    /// Symbol every dynamic plugin exports.
    pub const CREATE_PLUGIN_SYMBOL: &[u8] = b"create_plugin";

    /// Type of the plugin creation function exported by dynamic plugins.
    ///
    /// Generated by [`declare_plugin!`](crate::declare_plugin).
    pub type CreatePluginFn = unsafe extern "C" fn() -> *mut dyn Plugin;

    /// Loads plugins from shared libraries (.so / .dll / .dylib).
    pub struct DynamicLoader {
        /// Loaded libraries, kept alive for the lifetime of the loader.
        libraries: Vec<libloading::Library>,
    }

    impl DynamicLoader {
        /// Creates a new dynamic loader.
        pub fn new() -> Self {
            Self {
                libraries: Vec::new(),
            }
        }

        /// Loads a plugin from the given shared library path.
        ///
        /// # Safety
        /// Runs the library's initialisers and its `create_plugin` export.
        /// The library must have been built against this crate with
        /// `declare_plugin!`, and no plugin it produced may outlive the loader.
        pub unsafe fn load(&mut self, path: &Path) -> Result<Arc<dyn Plugin>, AppError> {
            let lib = unsafe { libloading::Library::new(path) }.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Resolution,
                    format!("Failed to load plugin library '{}'", path.display()),
                    e,
                )
            })?;

            let plugin = {
                let create_fn: libloading::Symbol<'_, CreatePluginFn> =
                    unsafe { lib.get(CREATE_PLUGIN_SYMBOL) }.map_err(|e| {
                        AppError::resolution(format!(
                            "Plugin '{}' missing 'create_plugin' symbol: {}",
                            path.display(),
                            e
                        ))
                    })?;

                let raw_plugin = unsafe { create_fn() };
                if raw_plugin.is_null() {
                    return Err(AppError::resolution(format!(
                        "Plugin '{}' returned a null instance",
                        path.display()
                    )));
                }
                Arc::from(unsafe { Box::from_raw(raw_plugin) })
            };

            info!(path = %path.display(), "Dynamic plugin loaded");

            self.libraries.push(lib);

            Ok(plugin)
        }

        /// Returns the number of libraries loaded so far.
        pub fn loaded_count(&self) -> usize {
            self.libraries.len()
        }
    }

    impl Default for DynamicLoader {
        fn default() -> Self {
            Self::new()
        }
    }

    impl std::fmt::Debug for DynamicLoader {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("DynamicLoader")
                .field("loaded_count", &self.libraries.len())
                .finish()
        }
    }
}

/// Stub loader when the `dynamic` feature is not enabled.
#[cfg(not(feature = "dynamic"))]
pub mod dynamic_loader {
    use std::path::Path;
    use std::sync::Arc;

    use crate::traits::Plugin;
    use docpipe_core::error::AppError;

    /// Stub dynamic loader; every load fails.
    #[derive(Debug, Default)]
    pub struct DynamicLoader;

    impl DynamicLoader {
        /// Creates a stub loader.
        pub fn new() -> Self {
            Self
        }

        /// Always fails: dynamic loading is compiled out.
        ///
        /// # Safety
        /// Trivially safe; `unsafe` only mirrors the real loader's signature.
        pub unsafe fn load(&mut self, path: &Path) -> Result<Arc<dyn Plugin>, AppError> {
            Err(AppError::resolution(format!(
                "Cannot load '{}': dynamic plugin loading is disabled (enable the `dynamic` feature)",
                path.display()
            )))
        }

        /// Always zero.
        pub fn loaded_count(&self) -> usize {
            0
        }
    }
}

pub use dynamic_loader::DynamicLoader;
