//! The auth guard: `AuthUser` extractor for protected routes.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bson::oid::ObjectId;

use mercato_core::error::AppError;
use mercato_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Guard rejections.
///
/// A missing token is answered directly with a fixed 401 body, without
/// consulting the exception chain; an invalid token is a `Forbidden`
/// error routed through the chain like any other.
#[derive(Debug)]
pub enum AuthRejection {
    /// No bearer token was presented.
    MissingToken,
    /// A token was presented but failed verification.
    Invalid(AppError),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "success": false,
                    "message": "No Authorization Token Provided",
                })),
            )
                .into_response(),
            Self::Invalid(err) => ApiError(err).into_response(),
        }
    }
}

fn invalid_token() -> AppError {
    AppError::forbidden("Invalid Authorization Token Provided")
        .with_detail("Invalid Authorization Token Provided")
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthRejection::MissingToken)?;

        let claims = state
            .jwt_decoder
            .decode(token)
            .map_err(AuthRejection::Invalid)?;

        let user_id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| AuthRejection::Invalid(invalid_token()))?;

        Ok(AuthUser(RequestContext {
            user_id,
            email: claims.email,
            first_name: claims.first_name,
        }))
    }
}
