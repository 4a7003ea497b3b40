//! JSON body extractor whose rejection flows through the exception chain.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use mercato_core::error::AppError;

use crate::error::ApiError;

/// Like [`axum::Json`], but a body that fails to parse surfaces as a
/// `BadRequest` in the standard error envelope instead of Axum's plain
/// text rejection.
#[derive(Debug, Clone)]
pub struct BodyJson<T>(pub T);

impl<S, T> FromRequest<S> for BodyJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let message = rejection.body_text();
                Err(ApiError(
                    AppError::bad_request(message.clone()).with_detail(message),
                ))
            }
        }
    }
}
