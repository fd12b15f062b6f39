//! Refresh Use Case
//!
//! Exchanges a live refresh token for a fresh access token.

use std::sync::Arc;

use crate::application::token::{TokenKind, TokenService};
use crate::domain::repository::{RevokedTokenRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Refresh output
pub struct RefreshOutput {
    pub access_token: String,
}

/// Refresh use case
pub struct RefreshUseCase<U, R>
where
    U: UserRepository,
    R: RevokedTokenRepository,
{
    user_repo: Arc<U>,
    revoked_repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<U, R> RefreshUseCase<U, R>
where
    U: UserRepository,
    R: RevokedTokenRepository,
{
    pub fn new(user_repo: Arc<U>, revoked_repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            revoked_repo,
            tokens,
        }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<RefreshOutput> {
        let claims = self.tokens.verify(refresh_token, TokenKind::Refresh)?;

        if self.revoked_repo.is_revoked(claims.jti).await? {
            return Err(AuthError::TokenRevoked);
        }

        let user_id = claims.user_id()?;
        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::TokenInvalid)?;

        if !user.can_login() {
            return Err(AuthError::AccountDisabled);
        }

        let access_token = self.tokens.issue(&user.user_id, TokenKind::Access)?;

        tracing::debug!(user_id = %user.user_id, "Access token refreshed");

        Ok(RefreshOutput { access_token })
    }
}
