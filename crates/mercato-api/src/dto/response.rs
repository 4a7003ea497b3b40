//! Response DTOs and the success envelope.
//!
//! Outward representations of persisted records live here; they are the
//! only serialized forms, so the password hash and the soft-delete
//! bookkeeping fields can never leak into a response.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mercato_entity::product::Product;
use mercato_entity::user::User;

/// Message used when a handler does not attach its own.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Request was successful";

/// The success envelope.
///
/// Every handler emits through this explicit builder, which is the one
/// exit point for successful JSON; error responses are shaped by the
/// exception handler chain instead, so the two can never disagree.
#[derive(Debug, Clone)]
pub struct Envelope<T: Serialize> {
    status: StatusCode,
    message: Option<String>,
    data: T,
}

#[derive(Serialize)]
struct SuccessBody<T: Serialize> {
    status_code: u16,
    success: bool,
    message: String,
    data: T,
}

impl<T: Serialize> Envelope<T> {
    /// A 200 envelope around the payload.
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: None,
            data,
        }
    }

    /// A 201 envelope around the payload.
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: None,
            data,
        }
    }

    /// Attach a custom success message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let body = SuccessBody {
            status_code: self.status.as_u16(),
            success: true,
            message: self
                .message
                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            data: self.data,
        };
        (self.status, Json(body)).into_response()
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Document id in hex form.
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            created_at: user.created_at.to_chrono(),
            updated_at: user.updated_at.to_chrono(),
        }
    }
}

/// Product representation for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Document id in hex form.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Category label.
    pub category: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stock count.
    pub stock: i64,
    /// URL of the product image.
    pub image_url: String,
    /// Owning user id in hex form.
    pub user: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            name: product.name,
            price: product.price,
            category: product.category,
            description: product.description,
            stock: product.stock,
            image_url: product.image_url,
            user: product.user.to_hex(),
            created_at: product.created_at.to_chrono(),
            updated_at: product.updated_at.to_chrono(),
        }
    }
}

/// Login response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user.
    pub user: UserResponse,
    /// Signed bearer token.
    pub token: String,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
