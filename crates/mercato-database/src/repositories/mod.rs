//! Repository traits and their MongoDB implementations.
//!
//! Services depend on the traits; the binary wires the Mongo
//! implementations, tests wire in-memory ones.

pub mod product;
pub mod user;

use async_trait::async_trait;
use bson::oid::ObjectId;

use mercato_core::result::AppResult;
use mercato_core::types::filter::ProductFilter;
use mercato_core::types::pagination::{Page, PageParams};
use mercato_entity::product::{CreateProduct, Product, ProductChanges};
use mercato_entity::user::{CreateUser, User};

pub use product::MongoProductRepository;
pub use user::MongoUserRepository;

/// Users collection name.
pub const USERS: &str = "users";
/// Products collection name.
pub const PRODUCTS: &str = "products";

/// Data access for user documents.
///
/// Ordinary lookups never see soft-deleted users; the deleted-only path
/// is the single way to reach them.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Find a non-deleted user by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a non-deleted user by id.
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<User>>;

    /// Find a soft-deleted user by id.
    async fn find_deleted_by_id(&self, id: ObjectId) -> AppResult<Option<User>>;

    /// Insert a new user and return the stored document.
    async fn insert(&self, user: CreateUser) -> AppResult<User>;

    /// Mark a user as deleted without removing the document.
    async fn soft_delete(&self, id: ObjectId) -> AppResult<()>;

    /// Physically remove every user. Used by the seeder only.
    async fn clear(&self) -> AppResult<u64>;
}

/// Data access for product documents.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Fetch one page of non-deleted products, newest first.
    async fn paginate(
        &self,
        filter: &ProductFilter,
        params: &PageParams,
    ) -> AppResult<Page<Product>>;

    /// Find a non-deleted product by id.
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Product>>;

    /// Find a soft-deleted product by id.
    async fn find_deleted_by_id(&self, id: ObjectId) -> AppResult<Option<Product>>;

    /// Insert a new product and return the stored document.
    async fn insert(&self, product: CreateProduct) -> AppResult<Product>;

    /// Apply a partial update and return the updated document, or `None`
    /// if the product does not exist or is soft-deleted.
    async fn update(&self, id: ObjectId, changes: ProductChanges) -> AppResult<Option<Product>>;

    /// Mark a product as deleted without removing the document.
    async fn soft_delete(&self, id: ObjectId) -> AppResult<()>;
}
