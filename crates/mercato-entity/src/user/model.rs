//! User entity model.

use bson::DateTime;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A registered user document.
///
/// The serialized form maps 1:1 to the stored document, including the
/// password hash and soft-delete bookkeeping. Those fields must never
/// reach an HTTP response; the API crate's `UserResponse` is the only
/// outward representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Document identifier.
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address, unique across the collection.
    pub email: String,
    /// Argon2id password hash.
    pub password: String,
    /// Soft-delete flag; deleted users are invisible to ordinary lookups.
    #[serde(default)]
    pub deleted: bool,
    /// When the user was soft-deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
    /// When the user was created.
    pub created_at: DateTime,
    /// When the user was last updated.
    pub updated_at: DateTime,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password: String,
}

impl CreateUser {
    /// Materialize the document, stamping identity and timestamps.
    pub fn into_user(self) -> User {
        let now = DateTime::now();
        User {
            id: ObjectId::new(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            deleted: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}
