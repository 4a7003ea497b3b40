//! Health check handler.

use crate::dto::response::{Envelope, HealthResponse};

/// GET /health
pub async fn health_check() -> Envelope<HealthResponse> {
    Envelope::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
