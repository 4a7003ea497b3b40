//! User repository implementation.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{DateTime, doc};
use mongodb::Collection;

use mercato_core::result::AppResult;
use mercato_entity::user::{CreateUser, User};

use super::UserRepository;
use crate::connection::DatabaseHandle;
use crate::errors::map_store_error;

/// MongoDB-backed user repository.
#[derive(Debug, Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Create a new user repository over the given database handle.
    pub fn new(handle: &DatabaseHandle) -> Self {
        Self {
            collection: handle.users(),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! {"email": email, "deleted": {"$ne": true}})
            .await
            .map_err(map_store_error)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! {"_id": id, "deleted": {"$ne": true}})
            .await
            .map_err(map_store_error)
    }

    async fn find_deleted_by_id(&self, id: ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! {"_id": id, "deleted": true})
            .await
            .map_err(map_store_error)
    }

    async fn insert(&self, user: CreateUser) -> AppResult<User> {
        let user = user.into_user();
        self.collection
            .insert_one(&user)
            .await
            .map_err(map_store_error)?;
        Ok(user)
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

    async fn clear(&self) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .map_err(map_store_error)?;
        Ok(result.deleted_count)
    }
}
