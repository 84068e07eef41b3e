//! Publish-time I/O callbacks handed to plugins through the publish hook.

use std::path::Path;
use std::sync::Arc;

use crate::result::AppResult;

/// Writes `content` to `path` inside the output destination.
pub type WriteFileFn = Arc<dyn Fn(&Path, &str) -> AppResult<()> + Send + Sync>;

/// Copies `src` (a file or a directory tree) to `dest` inside the output destination.
pub type CopyDirFn = Arc<dyn Fn(&Path, &Path) -> AppResult<()> + Send + Sync>;

/// Reads a file from the output destination.
pub type ReadFileFn = Arc<dyn Fn(&Path) -> AppResult<String> + Send + Sync>;
