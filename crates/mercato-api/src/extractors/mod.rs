//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;

pub use auth::AuthUser;
pub use json::BodyJson;
pub use pagination::ListQuery;
