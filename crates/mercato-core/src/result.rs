//! Convenience result type alias for Mercato.

use crate::error::AppError;

/// A specialized `Result` type for Mercato operations.
pub type AppResult<T> = Result<T, AppError>;
