//! Login Use Case
//!
//! Authenticates credentials and issues an access/refresh token pair.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{TokenKind, TokenService};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Username;
use crate::error::{AuthError, AuthResult};
use platform::password::ClearTextPassword;

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub access_token: String,
    pub refresh_token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Any parse failure on the identifier means unknown user; keep the
        // error identical to a wrong password so probing reveals nothing
        let username =
            Username::new(input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.can_login() {
            return Err(AuthError::AccountDisabled);
        }

        let clear = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password.verify(&clear, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(&user.user_id, TokenKind::Access)?;
        let refresh_token = self.tokens.issue(&user.user_id, TokenKind::Refresh)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(LoginOutput {
            access_token,
            refresh_token,
        })
    }
}
