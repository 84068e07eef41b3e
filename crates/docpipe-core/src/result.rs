//! Convenience result type alias for docpipe.

use crate::error::AppError;

/// A specialized `Result` type for docpipe operations.
pub type AppResult<T> = Result<T, AppError>;
