//! Image uploader trait for the external image hosting service.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// An image file ready to be pushed to the image host.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original filename as submitted by the client.
    pub file_name: String,
    /// MIME type of the file.
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Bytes,
}

/// What the image host reports back about a stored image.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UploadedMedia {
    /// Publicly reachable URL of the uploaded image.
    pub url: String,
    /// Host-side identifier of the asset.
    pub public_id: String,
}

/// Trait for the external image hosting service.
///
/// Defined here in `mercato-core` and implemented in `mercato-storage`;
/// tests substitute a stub.
#[async_trait]
pub trait ImageUploader: Send + Sync + 'static {
    /// Upload an image into the given folder and return its public URL.
    async fn upload(&self, image: ImageUpload, folder: &str) -> AppResult<UploadedMedia>;
}
