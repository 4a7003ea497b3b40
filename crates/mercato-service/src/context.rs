//! Request context carrying the authenticated identity.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Identity facts resolved from the bearer token.
///
/// Extracted by the auth guard and passed into service methods so every
/// operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's document id.
    pub user_id: ObjectId,
    /// Email address from the token claims.
    pub email: String,
    /// First name from the token claims.
    pub first_name: String,
}
