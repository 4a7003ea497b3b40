//! # mercato-auth
//!
//! Bearer-token issuance/verification and password hashing.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
