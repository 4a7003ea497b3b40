//! Login orchestration.

use std::sync::Arc;

use mercato_auth::jwt::encoder::JwtEncoder;
use mercato_auth::password::hasher::PasswordHasher;
use mercato_core::error::AppError;
use mercato_core::result::AppResult;
use mercato_database::repositories::UserRepository;
use mercato_entity::user::User;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user document.
    pub user: User,
    /// Signed bearer token for subsequent requests.
    pub token: String,
}

/// Authenticates users and issues tokens.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Verify credentials and issue a token.
    ///
    /// An unknown email and a wrong password produce the identical
    /// error, so callers cannot probe which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password)? {
            return Err(invalid_credentials());
        }

        let token = self.encoder.sign(&user)?;
        tracing::info!(user_id = %user.id, "user logged in");

        Ok(LoginOutcome { user, token })
    }
}

fn invalid_credentials() -> AppError {
    AppError::http(400, "Invalid Email or Password").with_detail("Invalid Email or Password")
}
