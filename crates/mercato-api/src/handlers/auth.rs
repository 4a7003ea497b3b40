//! Auth handlers.

use axum::extract::State;

use crate::dto::request::LoginForm;
use crate::dto::response::{Envelope, LoginResponse};
use crate::error::ApiError;
use crate::extractors::BodyJson;
use crate::state::AppState;

/// POST /api/v1/auth
pub async fn login(
    State(state): State<AppState>,
    BodyJson(form): BodyJson<LoginForm>,
) -> Result<Envelope<LoginResponse>, ApiError> {
    let credentials = form.validate()?;

    let outcome = state
        .auth_service
        .login(&credentials.email, &credentials.password)
        .await?;

    Ok(Envelope::ok(LoginResponse {
        user: outcome.user.into(),
        token: outcome.token,
    })
    .message("Login successful"))
}
