//! # mercato-api
//!
//! HTTP layer: router, handlers, DTOs, the validation gate, the auth
//! guard, and the response/error normalization pipeline that gives
//! every response the same JSON envelope.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
pub mod validation;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
