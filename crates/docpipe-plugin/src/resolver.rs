//! Plugin resolver: identifier string → loaded, cached plugin instance.
//!
//! Resolution order for an identifier not seen before in this run:
//!
//! 1. a compiled-in plugin registered under that exact identifier;
//! 2. a path-like identifier (`.` or `/` prefix) is taken relative to the
//!    process working directory and loaded as a shared library;
//! 3. any other identifier is looked up as a library in the local plugin
//!    directory. The directory applies to that lookup only.
//!
//! The first successful result is cached, and every later resolution of the
//! same identifier returns that same instance.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use docpipe_core::error::{AppError, ErrorKind};
use docpipe_core::types::plugin_entry::IdentifierKind;

use crate::loader::{self, DynamicLoader};
use crate::registry::PluginRegistry;
use crate::traits::Plugin;

/// Resolves plugin identifiers and owns loaded plugin identity.
#[derive(Debug)]
pub struct PluginResolver {
    /// Identifier → resolved plugin. Declared before `loader` so cached
    /// plugins drop before the libraries that contain their code.
    cache: HashMap<String, Arc<dyn Plugin>>,
    /// Compiled-in plugins.
    registry: PluginRegistry,
    /// Shared-library loader.
    loader: DynamicLoader,
    /// Local directory for package-named library lookups.
    local_dir: PathBuf,
}

impl PluginResolver {
    /// Creates a resolver over the given registry, with `./plugins` as the
    /// local plugin directory.
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            cache: HashMap::new(),
            registry,
            loader: DynamicLoader::new(),
            local_dir: PathBuf::from("./plugins"),
        }
    }

    /// Sets the local plugin directory.
    pub fn with_local_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.local_dir = dir.into();
        self
    }

    /// Resolves `identifier` to its plugin, loading it on first use.
    pub fn resolve(&mut self, identifier: &str) -> Result<Arc<dyn Plugin>, AppError> {
        if let Some(plugin) = self.cache.get(identifier) {
            return Ok(Arc::clone(plugin));
        }

        let plugin = self.load(identifier).inspect_err(|e| {
            warn!(plugin = %identifier, error = %e, "Plugin resolution failed");
        })?;

        info!(plugin = %identifier, name = %plugin.name(), "Plugin resolved");
        self.cache.insert(identifier.to_string(), Arc::clone(&plugin));
        Ok(plugin)
    }

    fn load(&mut self, identifier: &str) -> Result<Arc<dyn Plugin>, AppError> {
        if let Some(plugin) = self.registry.create(identifier) {
            debug!(plugin = %identifier, "Resolved from compiled-in registry");
            return Ok(plugin);
        }

        let candidate = match IdentifierKind::of(identifier) {
            IdentifierKind::Path => std::env::current_dir()
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Resolution,
                        "Cannot determine working directory",
                        e,
                    )
                })?
                .join(identifier),
            IdentifierKind::Package => self.local_dir.join(identifier),
        };

        let path = loader::locate_library(&candidate).ok_or_else(|| {
            AppError::resolution(format!(
                "Plugin '{}' not found (not registered, no library at '{}')",
                identifier,
                candidate.display()
            ))
        })?;

        self.load_library(&path)
    }

    fn load_library(&mut self, path: &Path) -> Result<Arc<dyn Plugin>, AppError> {
        // SAFETY: plugins are trusted code by contract, and every instance the
        // loader produces is stored in `cache`, which drops before `loader`.
        let plugin = unsafe { self.loader.load(path) }?;
        debug!(
            path = %path.display(),
            libraries = self.loader.loaded_count(),
            "Plugin library loaded"
        );
        Ok(plugin)
    }

    /// Returns whether `identifier` has been resolved in this run.
    pub fn is_loaded(&self, identifier: &str) -> bool {
        self.cache.contains_key(identifier)
    }

    /// Returns the identifiers resolved so far, sorted.
    pub fn loaded(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.cache.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the compiled-in registry.
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Returns the local plugin directory.
    pub fn local_dir(&self) -> &Path {
        &self.local_dir
    }
}
