//! Traits implemented across crate boundaries.

pub mod uploader;

pub use uploader::{ImageUpload, ImageUploader, UploadedMedia};
