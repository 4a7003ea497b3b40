//! Document store configuration.

use serde::{Deserialize, Serialize};

/// MongoDB connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string.
    #[serde(default = "default_uri")]
    pub uri: String,
    /// Database name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Server selection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            name: default_name(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_name() -> String {
    "product-db".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}
