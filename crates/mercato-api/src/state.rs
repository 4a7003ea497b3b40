//! Application state shared across all handlers.

use std::sync::Arc;

use mercato_auth::jwt::decoder::JwtDecoder;
use mercato_core::config::AppConfig;
use mercato_service::auth::service::AuthService;
use mercato_service::product::service::ProductService;

/// Shared dependencies, passed to every handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks and are
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Bearer token validator used by the auth guard.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Login orchestration.
    pub auth_service: Arc<AuthService>,
    /// Product CRUD orchestration.
    pub product_service: Arc<ProductService>,
}
