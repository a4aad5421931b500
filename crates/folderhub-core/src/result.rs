//! Convenience result type alias for FolderHub.

use crate::error::AppError;

/// A specialized `Result` type for FolderHub operations that cross the
/// application boundary.
pub type AppResult<T> = Result<T, AppError>;
