//! Convenience result type alias for Leaveboard.

use crate::error::AppError;

/// A specialized `Result` type for Leaveboard operations.
pub type AppResult<T> = Result<T, AppError>;
