//! # mercato-storage
//!
//! Client for the external image hosting service. The uploader trait
//! lives in `mercato-core`; this crate provides the HTTP implementation.

pub mod providers;

pub use providers::cloudinary::CloudinaryUploader;
