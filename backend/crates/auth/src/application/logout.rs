//! Logout Use Case
//!
//! Revokes the presented token by `jti`. The revocation outlives the
//! request and is honored until the token's natural expiry.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::RevokedToken;
use crate::domain::repository::RevokedTokenRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<R>
where
    R: RevokedTokenRepository,
{
    revoked_repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LogoutUseCase<R>
where
    R: RevokedTokenRepository,
{
    pub fn new(revoked_repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self {
            revoked_repo,
            tokens,
        }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<()> {
        // Either token kind can be revoked
        let claims = self.tokens.verify_any(token)?;

        let revocation = RevokedToken::new(claims.jti, claims.expires_at());
        self.revoked_repo.revoke(&revocation).await?;

        tracing::info!(jti = %claims.jti, "Token revoked");

        Ok(())
    }
}
