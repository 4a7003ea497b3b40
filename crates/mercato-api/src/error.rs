//! The exception handler chain.
//!
//! The single place error response shape is decided. Errors raised
//! anywhere in the request pipeline are dispatched through an explicit
//! ordered list of handlers; each recognizes one category and emits the
//! error envelope, or declines so the next handler is consulted. The
//! terminal catch-all also recognizes two store failure shapes: a
//! malformed document id and a uniqueness-constraint violation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use mercato_core::error::{AppError, ErrorKind, ExceptionDetail};
use mercato_core::types::response::ResponseBody;

/// Newtype carrying an [`AppError`] out of a handler.
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts any
/// `AppError` and `into_response` runs the chain.
#[derive(Debug, Clone)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        dispatch(&self.0)
    }
}

/// One link in the chain: recognize the error and finalize a response,
/// or return `None` to delegate to the next handler unchanged.
type ExceptionHandler = fn(&AppError) -> Option<Response>;

/// The ordered chain. Order matters: the catch-all matches everything,
/// so it must come last.
const EXCEPTION_CHAIN: &[ExceptionHandler] = &[
    bad_request_handler,
    forbidden_handler,
    not_found_handler,
    http_handler,
    catch_all_handler,
];

/// Run the chain and return the first finalized response.
pub fn dispatch(err: &AppError) -> Response {
    EXCEPTION_CHAIN
        .iter()
        .find_map(|handler| handler(err))
        .unwrap_or_else(|| emit(StatusCode::INTERNAL_SERVER_ERROR, err))
}

fn bad_request_handler(err: &AppError) -> Option<Response> {
    (err.kind == ErrorKind::BadRequest).then(|| emit(StatusCode::BAD_REQUEST, err))
}

fn forbidden_handler(err: &AppError) -> Option<Response> {
    (err.kind == ErrorKind::Forbidden).then(|| emit(StatusCode::FORBIDDEN, err))
}

fn not_found_handler(err: &AppError) -> Option<Response> {
    (err.kind == ErrorKind::NotFound).then(|| emit(status_of(err), err))
}

fn http_handler(err: &AppError) -> Option<Response> {
    (err.kind == ErrorKind::Http).then(|| emit(status_of(err), err))
}

/// Terminal handler.
///
/// `InvalidId` and `DuplicateKey` are the two recognized store failure
/// shapes; validation errors land here too since no earlier handler
/// claims them. Anything unclassified surfaces as 500 under its native
/// name rather than being swallowed.
fn catch_all_handler(err: &AppError) -> Option<Response> {
    if err.kind == ErrorKind::Internal {
        tracing::error!(name = err.error_name(), message = %err.message, "unclassified error");
    }
    Some(emit(status_of(err), err))
}

fn status_of(err: &AppError) -> StatusCode {
    StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Emit the error envelope: `{status_code, success: false, error,
/// message | messages}`. Array-valued detail goes to `messages`, scalar
/// detail to `message`; absent detail falls back to the error's own
/// message.
fn emit(status: StatusCode, err: &AppError) -> Response {
    let mut body = ResponseBody {
        status_code: status.as_u16(),
        success: false,
        error: Some(err.error_name().to_string()),
        ..Default::default()
    };

    match &err.detail {
        Some(ExceptionDetail::Many(list)) => body.messages = Some(list.clone()),
        Some(ExceptionDetail::Single(message)) => body.message = Some(message.clone()),
        None => body.message = Some(err.message.clone()),
    }

    (status, Json(body)).into_response()
}
