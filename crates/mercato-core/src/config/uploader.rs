//! Image host configuration.

use serde::{Deserialize, Serialize};

/// Credentials and defaults for the external image hosting service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploaderConfig {
    /// Cloud name identifying the account.
    #[serde(default)]
    pub cloud_name: String,
    /// API key.
    #[serde(default)]
    pub api_key: String,
    /// API secret used to sign upload requests.
    #[serde(default)]
    pub api_secret: String,
    /// Folder product images are uploaded into.
    #[serde(default = "default_folder")]
    pub folder: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            folder: default_folder(),
        }
    }
}

fn default_folder() -> String {
    "product_images".to_string()
}
