//! Product entity model.

use bson::DateTime;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A catalog item document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Document identifier.
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Product name (text-indexed for free-text search).
    pub name: String,
    /// Unit price, non-negative.
    pub price: f64,
    /// Category label.
    pub category: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stock count, non-negative.
    pub stock: i64,
    /// URL returned by the image host.
    pub image_url: String,
    /// Owning user.
    pub user: ObjectId,
    /// Soft-delete flag.
    #[serde(default)]
    pub deleted: bool,
    /// When the product was soft-deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
    /// When the product was created.
    pub created_at: DateTime,
    /// When the product was last updated.
    pub updated_at: DateTime,
}

/// Data required to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
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
    /// URL returned by the image host.
    pub image_url: String,
    /// Owning user.
    pub user: ObjectId,
}

impl CreateProduct {
    /// Materialize the document, stamping identity and timestamps.
    pub fn into_product(self) -> Product {
        let now = DateTime::now();
        Product {
            id: ObjectId::new(),
            name: self.name,
            price: self.price,
            category: self.category,
            description: self.description,
            stock: self.stock,
            image_url: self.image_url,
            user: self.user,
            deleted: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update applied to an existing product.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductChanges {
    /// New name.
    pub name: Option<String>,
    /// New price.
    pub price: Option<f64>,
    /// New category.
    pub category: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New stock count.
    pub stock: Option<i64>,
    /// Replacement image URL (set after a re-upload).
    pub image_url: Option<String>,
}

impl ProductChanges {
    /// Whether the update carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.stock.is_none()
            && self.image_url.is_none()
    }

    /// Apply the changes to a product in place, bumping `updatedAt`.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(description) = &self.description {
            product.description = Some(description.clone());
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(image_url) = &self.image_url {
            product.image_url = image_url.clone();
        }
        product.updated_at = DateTime::now();
    }
}
