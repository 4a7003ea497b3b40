//! Request DTOs and their validation rules.
//!
//! Raw forms keep every field optional and text fields in string form;
//! the validate methods are the gate between transport and domain. A
//! multipart file contributes its metadata under its field name, so the
//! image participates in validation like any other field.

use axum::extract::Multipart;
use axum::extract::multipart::Field;
use bytes::Bytes;
use serde::Deserialize;

use mercato_core::error::AppError;
use mercato_core::result::AppResult;
use mercato_core::traits::uploader::ImageUpload;
use mercato_entity::product::ProductChanges;
use mercato_service::product::service::NewProduct;

use crate::validation::{
    FieldErrors, check_image, count_with_default, optional_count, optional_number,
    optional_string, required_number, required_string,
};

/// A file attached to a multipart request: metadata plus contents.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original filename as submitted by the client.
    pub original_name: String,
    /// MIME type declared for the part.
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Raw file contents.
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Convert into the uploader's input type.
    pub fn into_upload(self) -> ImageUpload {
        ImageUpload {
            file_name: self.original_name,
            content_type: self.content_type,
            bytes: self.bytes,
        }
    }
}

/// Raw login body; requiredness is the validator's concern.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Validated login credentials.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Email address, trimmed.
    pub email: String,
    /// Plaintext password, trimmed.
    pub password: String,
}

impl LoginForm {
    /// Run the login rules: both fields required, trimmed.
    pub fn validate(self) -> AppResult<LoginRequest> {
        let mut errors = FieldErrors::new();
        let email = required_string(&mut errors, "email", self.email);
        let password = required_string(&mut errors, "password", self.password);
        errors.into_result()?;

        let (Some(email), Some(password)) = (email, password) else {
            return Err(AppError::internal("login form lost a validated field"));
        };
        Ok(LoginRequest { email, password })
    }
}

/// Raw product form assembled from a multipart body.
#[derive(Debug, Default)]
pub struct ProductForm {
    /// Product name.
    pub name: Option<String>,
    /// Unit price, unparsed.
    pub price: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Stock count, unparsed.
    pub stock: Option<String>,
    /// Attached image file.
    pub image: Option<UploadedFile>,
}

impl ProductForm {
    /// Assemble the candidate payload from a multipart body.
    ///
    /// Declared text fields are collected as-is, the `image` part is
    /// read fully into memory, and undeclared fields are dropped.
    /// Transport-level failures are bad requests, not validation errors.
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::bad_request(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            match name.as_str() {
                "name" => form.name = Some(text(field).await?),
                "price" => form.price = Some(text(field).await?),
                "category" => form.category = Some(text(field).await?),
                "description" => form.description = Some(text(field).await?),
                "stock" => form.stock = Some(text(field).await?),
                "image" => {
                    let original_name = field
                        .file_name()
                        .unwrap_or("upload")
                        .to_string();
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::bad_request(e.to_string()))?;
                    form.image = Some(UploadedFile {
                        original_name,
                        content_type,
                        size: bytes.len() as u64,
                        bytes,
                    });
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Creation rules: name/price/category/image required, stock
    /// defaults to 0, all bounds enforced.
    pub fn validate_create(self) -> AppResult<(NewProduct, UploadedFile)> {
        let mut errors = FieldErrors::new();

        let name = required_string(&mut errors, "name", self.name);
        let price = required_number(&mut errors, "price", self.price, 0.0);
        let category = required_string(&mut errors, "category", self.category);
        let description = optional_string(self.description);
        let stock = count_with_default(&mut errors, "stock", self.stock, 0);
        match &self.image {
            Some(image) => check_image(&mut errors, image),
            None => errors.record("image", "image is required"),
        }

        errors.into_result()?;

        let (Some(name), Some(price), Some(category), Some(stock), Some(image)) =
            (name, price, category, stock, self.image)
        else {
            return Err(AppError::internal("product form lost a validated field"));
        };

        Ok((
            NewProduct {
                name,
                price,
                category,
                description,
                stock,
            },
            image,
        ))
    }

    /// Update rules: every field optional under the creation bounds,
    /// but at least one must be present.
    pub fn validate_update(self) -> AppResult<(ProductChanges, Option<UploadedFile>)> {
        let mut errors = FieldErrors::new();

        if self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.stock.is_none()
            && self.image.is_none()
        {
            errors.record(
                "value",
                "value must contain at least one of [name, price, category, description, stock, image]",
            );
        }

        let name = self
            .name
            .and_then(|raw| required_string(&mut errors, "name", Some(raw)));
        let price = optional_number(&mut errors, "price", self.price, 0.0);
        let category = self
            .category
            .and_then(|raw| required_string(&mut errors, "category", Some(raw)));
        let description = optional_string(self.description);
        let stock = optional_count(&mut errors, "stock", self.stock);
        if let Some(image) = &self.image {
            check_image(&mut errors, image);
        }

        errors.into_result()?;

        Ok((
            ProductChanges {
                name,
                price,
                category,
                description,
                stock,
                image_url: None,
            },
            self.image,
        ))
    }
}

async fn text(field: Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::bad_request(e.to_string()))
}
