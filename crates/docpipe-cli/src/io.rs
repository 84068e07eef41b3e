//! Filesystem-backed publish callbacks rooted at an output directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use docpipe_core::error::{AppError, ErrorKind};
use docpipe_core::result::AppResult;
use docpipe_core::traits::{CopyDirFn, ReadFileFn, WriteFileFn};

/// Output directory handed to publish plugins.
///
/// Destination paths are resolved inside the directory; absolute paths and
/// `..` components are rejected. Copy sources are read relative to the
/// working directory.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Creates `root` if needed and wraps it.
    pub fn create(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| io_error("create", &root, e))?;
        Ok(Self { root })
    }

    /// Callback writing a file inside the output directory.
    pub fn write_file(&self) -> WriteFileFn {
        let out = self.clone();
        Arc::new(move |path: &Path, content: &str| -> AppResult<()> {
            let target = out.resolve(path)?;
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
            }
            fs::write(&target, content).map_err(|e| io_error("write", &target, e))?;
            debug!(path = %target.display(), bytes = content.len(), "File written");
            Ok(())
        })
    }

    /// Callback copying a file or directory tree into the output directory.
    pub fn copy_dir(&self) -> CopyDirFn {
        let out = self.clone();
        Arc::new(move |src: &Path, dest: &Path| -> AppResult<()> {
            let target = out.resolve(dest)?;
            copy_tree(src, &target)?;
            debug!(src = %src.display(), dest = %target.display(), "Copied");
            Ok(())
        })
    }

    /// Callback reading a file from the output directory.
    pub fn read_file(&self) -> ReadFileFn {
        let out = self.clone();
        Arc::new(move |path: &Path| -> AppResult<String> {
            let target = out.resolve(path)?;
            fs::read_to_string(&target).map_err(|e| io_error("read", &target, e))
        })
    }

    fn resolve(&self, path: &Path) -> AppResult<PathBuf> {
        let escapes = path.components().any(|c| {
            !matches!(
                c,
                std::path::Component::Normal(_) | std::path::Component::CurDir
            )
        });
        if escapes {
            return Err(AppError::io(format!(
                "Path '{}' is outside the output directory",
                path.display()
            )));
        }
        Ok(self.root.join(path))
    }
}

fn copy_tree(src: &Path, dest: &Path) -> AppResult<()> {
    let metadata = fs::metadata(src).map_err(|e| io_error("stat", src, e))?;
    if metadata.is_file() {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
        }
        fs::copy(src, dest).map_err(|e| io_error("copy", src, e))?;
        return Ok(());
    }

    fs::create_dir_all(dest).map_err(|e| io_error("create", dest, e))?;
    for entry in fs::read_dir(src).map_err(|e| io_error("list", src, e))? {
        let entry = entry.map_err(|e| io_error("list", src, e))?;
        copy_tree(&entry.path(), &dest.join(entry.file_name()))?;
    }
    Ok(())
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> AppError {
    AppError::with_source(
        ErrorKind::Io,
        format!("Failed to {} '{}': {}", action, path.display(), e),
        e,
    )
}
