//! JWT claims embedded in every issued token.

use serde::{Deserialize, Serialize};

/// Claims payload: the identity facts handlers act on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user's document id in hex form.
    pub sub: String,
    /// Email address at the time of issuance.
    pub email: String,
    /// First name, for convenience.
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
