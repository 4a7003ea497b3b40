//! Cloudinary upload client.
//!
//! Signed uploads via the HTTP API: a multipart POST to
//! `/v1_1/{cloud_name}/image/upload` carrying the file plus a SHA-256
//! request signature over the non-file parameters.

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use mercato_core::config::UploaderConfig;
use mercato_core::error::AppError;
use mercato_core::result::AppResult;
use mercato_core::traits::uploader::{ImageUpload, ImageUploader, UploadedMedia};

/// Uploads product images to Cloudinary.
#[derive(Debug, Clone)]
pub struct CloudinaryUploader {
    http: reqwest::Client,
    config: UploaderConfig,
}

/// The subset of the upload response we consume.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

impl CloudinaryUploader {
    /// Creates a new uploader from image-host configuration.
    pub fn new(config: UploaderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.config.cloud_name
        )
    }

    /// Request signature: SHA-256 over the alphabetically ordered
    /// non-file parameters followed by the API secret.
    fn signature(&self, folder: &str, timestamp: i64) -> String {
        let to_sign = format!("folder={folder}&timestamp={timestamp}{}", self.config.api_secret);
        let digest = Sha256::digest(to_sign.as_bytes());
        digest.iter().map(|b| format!("{b:02x}")).collect()
    }
}

#[async_trait]
impl ImageUploader for CloudinaryUploader {
    async fn upload(&self, image: ImageUpload, folder: &str) -> AppResult<UploadedMedia> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = self.signature(folder, timestamp);

        let file = reqwest::multipart::Part::bytes(image.bytes.to_vec())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|e| AppError::internal(format!("Invalid upload mime type: {e}")))?;

        let form = reqwest::multipart::Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
            .text("folder", folder.to_string())
            .part("file", file);

        let response = self
            .http
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::internal_named("CloudinaryError", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "image upload rejected");
            return Err(AppError::internal_named(
                "CloudinaryError",
                format!("Image upload failed with status {status}"),
            ));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::internal_named("CloudinaryError", e.to_string()))?;

        tracing::debug!(public_id = %body.public_id, "image uploaded");

        Ok(UploadedMedia {
            url: body.secure_url,
            public_id: body.public_id,
        })
    }
}
