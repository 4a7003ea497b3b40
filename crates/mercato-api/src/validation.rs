//! The validation gate's rule runner.
//!
//! Request DTOs declare their rules as plain functions over raw field
//! values; violations accumulate in a [`FieldErrors`] collector. All
//! rules run (no fail-fast), text fields coerce to numbers where a rule
//! demands it, and undeclared fields never reach the rules at all.
//!
//! Known limitation, kept deliberately: the collector maps field ->
//! message, so when one field violates several rules only the *last*
//! violation survives. The messages listed in the final error are the
//! surviving one-per-field texts, in field declaration order.

use mercato_core::error::AppError;

use crate::dto::request::UploadedFile;

/// Maximum accepted image size in bytes.
pub const MAX_IMAGE_BYTES: u64 = 2_000_000;

/// Accepted image MIME types.
pub const IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Ordered field -> message collector with last-write-wins semantics.
#[derive(Debug, Default)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    ///
    /// A later violation for the same field replaces the earlier message
    /// but keeps the field's original position in the listing.
    pub fn record(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, existing)) => *existing = message,
            None => self.entries.push((field.to_string(), message)),
        }
    }

    /// Whether any violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish the run: `Ok` if clean, otherwise a `Validation` error
    /// whose message is the first violation and whose detail lists every
    /// surviving message.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.entries.is_empty() {
            return Ok(());
        }
        let messages: Vec<String> = self.entries.into_iter().map(|(_, msg)| msg).collect();
        let first = messages[0].clone();
        Err(AppError::validation(first).with_details(messages))
    }
}

/// Required, trimmed string field.
pub fn required_string(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        None => {
            errors.record(field, format!("{field} is required"));
            None
        }
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                errors.record(field, format!("{field} is not allowed to be empty"));
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

/// Optional, trimmed string field; empty input counts as absent.
pub fn optional_string(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Required numeric field with a lower bound; text input is coerced.
pub fn required_number(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    min: f64,
) -> Option<f64> {
    let Some(raw) = value else {
        errors.record(field, format!("{field} is required"));
        return None;
    };
    coerce_number(errors, field, &raw, min)
}

/// Optional numeric field with a lower bound.
pub fn optional_number(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    min: f64,
) -> Option<f64> {
    value.and_then(|raw| coerce_number(errors, field, &raw, min))
}

fn coerce_number(errors: &mut FieldErrors, field: &str, raw: &str, min: f64) -> Option<f64> {
    let Ok(parsed) = raw.trim().parse::<f64>() else {
        errors.record(field, format!("{field} must be a number"));
        return None;
    };
    if parsed < min {
        errors.record(
            field,
            format!("{field} must be greater than or equal to {min}"),
        );
        return None;
    }
    Some(parsed)
}

/// Non-negative integer field that falls back to a default when absent.
pub fn count_with_default(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    default: i64,
) -> Option<i64> {
    match value {
        None => Some(default),
        Some(raw) => coerce_count(errors, field, &raw),
    }
}

/// Optional non-negative integer field.
pub fn optional_count(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
) -> Option<i64> {
    value.and_then(|raw| coerce_count(errors, field, &raw))
}

fn coerce_count(errors: &mut FieldErrors, field: &str, raw: &str) -> Option<i64> {
    let Ok(parsed) = raw.trim().parse::<i64>() else {
        errors.record(field, format!("{field} must be a number"));
        return None;
    };
    if parsed < 0 {
        errors.record(field, format!("{field} must be greater than or equal to 0"));
        return None;
    }
    Some(parsed)
}

/// Image rules: accepted MIME type and the 2 MB size ceiling.
pub fn check_image(errors: &mut FieldErrors, image: &UploadedFile) {
    if !IMAGE_MIME_TYPES.contains(&image.content_type.as_str()) {
        errors.record(
            "image",
            "image mimetype must be one of [image/jpeg, image/png]",
        );
    }
    if image.size > MAX_IMAGE_BYTES {
        errors.record("image", "image size must be less than or equal to 2 MB");
    }
}
