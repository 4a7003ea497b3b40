//! Product repository implementation.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{DateTime, Document, doc};
use mongodb::Collection;
use mongodb::options::ReturnDocument;

use mercato_core::result::AppResult;
use mercato_core::types::filter::ProductFilter;
use mercato_core::types::pagination::{Page, PageParams};
use mercato_entity::product::{CreateProduct, Product, ProductChanges};

use super::ProductRepository;
use crate::connection::DatabaseHandle;
use crate::errors::map_store_error;
use crate::pagination::Paginate;

/// MongoDB-backed product repository.
#[derive(Debug, Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new product repository over the given database handle.
    pub fn new(handle: &DatabaseHandle) -> Self {
        Self {
            collection: handle.products(),
        }
    }
}

/// Translate the listing filter into a store query.
fn filter_to_query(filter: &ProductFilter) -> Document {
    match &filter.search {
        Some(query) => doc! {"$text": {"$search": query}},
        None => Document::new(),
    }
}

/// Build the `$set` document for a partial update.
///
/// `updatedAt` is always bumped, matching insert-side stamping.
fn changes_to_set(changes: &ProductChanges) -> Document {
    let mut set = Document::new();
    if let Some(name) = &changes.name {
        set.insert("name", name);
    }
    if let Some(price) = changes.price {
        set.insert("price", price);
    }
    if let Some(category) = &changes.category {
        set.insert("category", category);
    }
    if let Some(description) = &changes.description {
        set.insert("description", description);
    }
    if let Some(stock) = changes.stock {
        set.insert("stock", stock);
    }
    if let Some(image_url) = &changes.image_url {
        set.insert("imageUrl", image_url);
    }
    set.insert("updatedAt", DateTime::now());
    set
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn paginate(
        &self,
        filter: &ProductFilter,
        params: &PageParams,
    ) -> AppResult<Page<Product>> {
        self.collection.paginate(filter_to_query(filter), params).await
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Product>> {
        self.collection
            .find_one(doc! {"_id": id, "deleted": {"$ne": true}})
            .await
            .map_err(map_store_error)
    }

    async fn find_deleted_by_id(&self, id: ObjectId) -> AppResult<Option<Product>> {
        self.collection
            .find_one(doc! {"_id": id, "deleted": true})
            .await
            .map_err(map_store_error)
    }

    async fn insert(&self, product: CreateProduct) -> AppResult<Product> {
        let product = product.into_product();
        self.collection
            .insert_one(&product)
            .await
            .map_err(map_store_error)?;
        Ok(product)
    }

    async fn update(&self, id: ObjectId, changes: ProductChanges) -> AppResult<Option<Product>> {
        self.collection
            .find_one_and_update(
                doc! {"_id": id, "deleted": {"$ne": true}},
                doc! {"$set": changes_to_set(&changes)},
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_store_error)
    }

    async fn soft_delete(&self, id: ObjectId) -> AppResult<()> {
        let now = DateTime::now();
        self.collection
            .update_one(
                doc! {"_id": id, "deleted": {"$ne": true}},
                doc! {"$set": {"deleted": true, "deletedAt": now, "updatedAt": now}},
            )
            .await
            .map_err(map_store_error)?;
        Ok(())
    }
}
