//! Unified application error types for Mercato.
//!
//! The original exception hierarchy is modeled as a tagged variant:
//! every error carries a category [`ErrorKind`], a human-readable
//! message, and an optional structured detail payload. All crates map
//! their internal failures into [`AppError`] for propagation through
//! the `?` operator; the HTTP layer decides the response shape.

use std::fmt;

use thiserror::Error;

/// Top-level error category used across the entire application.
///
/// The first five variants mirror the catchable exception taxonomy of
/// the API; the remaining ones are store-level failures recognized by
/// the catch-all handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The request was malformed before reaching domain logic.
    BadRequest,
    /// The caller's identity resolved but is not permitted.
    Forbidden,
    /// The referenced entity does not exist or is soft-deleted.
    NotFound,
    /// A generic HTTP-level failure with a caller-supplied status.
    Http,
    /// Input failed schema validation.
    Validation,
    /// A malformed entity identifier was supplied.
    InvalidId,
    /// The store rejected a write due to a uniqueness constraint.
    DuplicateKey,
    /// An unclassified internal error.
    Internal,
}

impl ErrorKind {
    /// The wire-level category name emitted in the `error` field.
    pub fn error_name(self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequestException",
            Self::Forbidden => "ForbiddenException",
            Self::NotFound => "NotFoundException",
            Self::Http => "HttpException",
            Self::Validation => "ValidationException",
            Self::InvalidId => "Invalid ID",
            Self::DuplicateKey => "Duplicate key",
            Self::Internal => "InternalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_name())
    }
}

/// Structured detail payload attached to an error.
///
/// Serializes as `{"message": "..."}` or `{"message": ["...", ...]}`,
/// matching the exception-response contract of the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ExceptionDetail {
    /// A single detail message.
    Single(String),
    /// A list of detail messages (one per violated field).
    Many(Vec<String>),
}

/// The unified application error used throughout Mercato.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Carried status for [`ErrorKind::Http`]; other kinds derive it.
    status: Option<u16>,
    /// Optional structured detail payload.
    pub detail: Option<ExceptionDetail>,
    /// Native error name preserved for unclassified failures.
    native_name: Option<String>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            detail: None,
            native_name: None,
        }
    }

    /// Create a bad-request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a generic HTTP error with an explicit status.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        let mut err = Self::new(ErrorKind::Http, message);
        err.status = Some(status);
        err
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a malformed-identifier error.
    pub fn invalid_id() -> Self {
        Self::new(ErrorKind::InvalidId, "The provided ID is invalid.")
    }

    /// Create a uniqueness-violation error echoing the store's message.
    pub fn duplicate_key(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateKey, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create an internal error preserving the native error name.
    pub fn internal_named(name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new(ErrorKind::Internal, message);
        err.native_name = Some(name.into());
        err
    }

    /// Attach a single structured detail message.
    pub fn with_detail(mut self, message: impl Into<String>) -> Self {
        self.detail = Some(ExceptionDetail::Single(message.into()));
        self
    }

    /// Attach a list of structured detail messages.
    pub fn with_details(mut self, messages: Vec<String>) -> Self {
        self.detail = Some(ExceptionDetail::Many(messages));
        self
    }

    /// Resolve the numeric HTTP status for this error.
    pub fn status(&self) -> u16 {
        match self.kind {
            ErrorKind::BadRequest | ErrorKind::InvalidId => 400,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Http => self.status.unwrap_or(500),
            ErrorKind::Validation => 422,
            ErrorKind::DuplicateKey => 409,
            ErrorKind::Internal => 500,
        }
    }

    /// The category name emitted in the `error` field of the envelope.
    ///
    /// Unclassified errors keep the name of the native error they wrap.
    pub fn error_name(&self) -> &str {
        self.native_name
            .as_deref()
            .unwrap_or_else(|| self.kind.error_name())
    }
}

impl From<bson::oid::Error> for AppError {
    fn from(_: bson::oid::Error) -> Self {
        Self::invalid_id()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal_named("SerializationError", err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal_named("IoError", err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::internal_named("ConfigurationError", err.to_string())
    }
}
