//! Route definitions for the Mercato HTTP API.
//!
//! Versioned routes are mounted under `/api/v1`; the health probe sits
//! at the root. The router receives `AppState` and threads it through
//! every handler via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::get,
    routing::post,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use mercato_core::config::server::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_v1 = Router::new().merge(auth_routes()).merge(product_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api/v1", api_v1)
        .route("/health", get(handlers::health::health_check))
        .layer(DefaultBodyLimit::max(state.config.server.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login only.
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth", post(handlers::auth::login))
}

/// Product CRUD. Every route is guarded by the `AuthUser` extractor.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::product::list_products).post(handlers::product::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::product::get_product)
                .put(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        )
}

/// Build the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}
