//! Product catalog service.

pub mod service;

pub use service::{NewProduct, ProductService};
