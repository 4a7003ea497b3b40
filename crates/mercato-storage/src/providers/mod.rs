//! Image host providers.

pub mod cloudinary;
