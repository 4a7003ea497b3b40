//! Mapping of driver errors into the application error taxonomy.

use mercato_core::error::AppError;
use mongodb::error::{ErrorKind, WriteFailure};

/// MongoDB server code for a uniqueness-constraint violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Classify a driver error.
///
/// Uniqueness violations keep the store's native message and surface as
/// 409 through the catch-all handler; everything else stays unclassified
/// under its native error name.
pub(crate) fn map_store_error(err: mongodb::error::Error) -> AppError {
    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY_CODE => {
            AppError::duplicate_key(write.message.clone())
        }
        ErrorKind::Command(command) if command.code == DUPLICATE_KEY_CODE => {
            AppError::duplicate_key(command.message.clone())
        }
        _ => AppError::internal_named("MongoError", err.to_string()),
    }
}
