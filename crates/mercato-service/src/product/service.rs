//! Product CRUD orchestration.
//!
//! Creation and image replacement delegate the file to the image host
//! first, then persist the returned URL. The two steps are not atomic:
//! if the document write fails after a successful upload, the uploaded
//! image is orphaned. The document remains the source of truth.

use std::sync::Arc;

use bson::oid::ObjectId;

use mercato_core::error::AppError;
use mercato_core::result::AppResult;
use mercato_core::traits::uploader::{ImageUpload, ImageUploader};
use mercato_core::types::filter::ProductFilter;
use mercato_core::types::pagination::{Page, PageParams};
use mercato_database::repositories::ProductRepository;
use mercato_entity::product::{CreateProduct, Product, ProductChanges};

use crate::context::RequestContext;

/// Validated payload for product creation, sans image and owner.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Category label.
    pub category: String,
    /// Optional description.
    pub description: Option<String>,
    /// Stock count.
    pub stock: i64,
}

/// Orchestrates product CRUD against the repository and the image host.
#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    uploader: Arc<dyn ImageUploader>,
    image_folder: String,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(
        products: Arc<dyn ProductRepository>,
        uploader: Arc<dyn ImageUploader>,
        image_folder: String,
    ) -> Self {
        Self {
            products,
            uploader,
            image_folder,
        }
    }

    /// One page of products, optionally narrowed by free-text search.
    pub async fn list(
        &self,
        search: Option<String>,
        params: PageParams,
    ) -> AppResult<Page<Product>> {
        let filter = ProductFilter { search };
        self.products.paginate(&filter, &params).await
    }

    /// A single product by id.
    pub async fn get(&self, id: ObjectId) -> AppResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(product_not_found)
    }

    /// Upload the image, then persist the product with the returned URL.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        payload: NewProduct,
        image: ImageUpload,
    ) -> AppResult<Product> {
        let media = self.uploader.upload(image, &self.image_folder).await?;

        let product = self
            .products
            .insert(CreateProduct {
                name: payload.name,
                price: payload.price,
                category: payload.category,
                description: payload.description,
                stock: payload.stock,
                image_url: media.url,
                user: ctx.user_id,
            })
            .await?;

        tracing::info!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Apply a partial update; a new image replaces the stored URL.
    pub async fn update(
        &self,
        id: ObjectId,
        mut changes: ProductChanges,
        image: Option<ImageUpload>,
    ) -> AppResult<Product> {
        if let Some(image) = image {
            let media = self.uploader.upload(image, &self.image_folder).await?;
            changes.image_url = Some(media.url);
        }

        self.products
            .update(id, changes)
            .await?
            .ok_or_else(product_not_found)
    }

    /// Soft-delete a product, returning the record as it was fetched.
    pub async fn soft_delete(&self, id: ObjectId) -> AppResult<Product> {
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(product_not_found)?;

        self.products.soft_delete(id).await?;

        tracing::info!(product_id = %id, "product soft-deleted");
        Ok(product)
    }
}

fn product_not_found() -> AppError {
    AppError::not_found("product does not exist").with_detail("product does not exist")
}
