//! JWT validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use mercato_core::config::AuthConfig;
use mercato_core::error::AppError;

use super::claims::Claims;

/// Message surfaced whenever a presented token fails verification.
const INVALID_TOKEN: &str = "Invalid Authorization Token Provided";

/// Validates bearer tokens against the shared signing secret.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds, for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token's signature and expiry.
    ///
    /// Any verification failure surfaces as a `Forbidden` error with the
    /// guard's fixed message; the caller never learns which check failed.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "token verification failed");
                AppError::forbidden(INVALID_TOKEN).with_detail(INVALID_TOKEN)
            })
    }
}
