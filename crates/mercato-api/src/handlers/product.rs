//! Product handlers.
//!
//! Thin orchestrators: extract, validate, call the service, wrap in the
//! envelope. Every failure propagates into the exception chain.

use axum::extract::{Multipart, Path, Query, State};
use bson::oid::ObjectId;

use mercato_core::error::AppError;
use mercato_core::types::pagination::Page;

use crate::dto::request::ProductForm;
use crate::dto::response::{Envelope, ProductResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListQuery};
use crate::state::AppState;

/// GET /api/v1/products?page&limit&q
pub async fn list_products(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Envelope<Page<ProductResponse>>, ApiError> {
    let page = state
        .product_service
        .list(query.search(), query.page_params())
        .await?;

    Ok(Envelope::ok(page.map(ProductResponse::from)).message("products retrieved successfully"))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Envelope<ProductResponse>, ApiError> {
    let id = parse_id(&id)?;
    let product = state.product_service.get(id).await?;

    Ok(Envelope::ok(ProductResponse::from(product)).message("products retrieved successfully"))
}

/// POST /api/v1/products
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<Envelope<ProductResponse>, ApiError> {
    let form = ProductForm::from_multipart(multipart).await?;
    let (payload, image) = form.validate_create()?;

    let product = state
        .product_service
        .create(&auth, payload, image.into_upload())
        .await?;

    Ok(Envelope::created(ProductResponse::from(product)).message("product created successfully"))
}

/// PUT /api/v1/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Envelope<ProductResponse>, ApiError> {
    let id = parse_id(&id)?;
    let form = ProductForm::from_multipart(multipart).await?;
    let (changes, image) = form.validate_update()?;

    let product = state
        .product_service
        .update(id, changes, image.map(|file| file.into_upload()))
        .await?;

    Ok(Envelope::ok(ProductResponse::from(product)).message("products updated successfully"))
}

/// DELETE /api/v1/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Envelope<ProductResponse>, ApiError> {
    let id = parse_id(&id)?;
    let product = state.product_service.soft_delete(id).await?;

    Ok(Envelope::ok(ProductResponse::from(product)).message("products deleted successfully"))
}

/// A malformed id is the store cast failure the catch-all recognizes.
fn parse_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|err| ApiError(AppError::from(err)))
}
