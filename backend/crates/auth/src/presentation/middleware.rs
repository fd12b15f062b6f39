//! Auth Middleware
//!
//! Bearer-token authentication for protected routes.

use axum::body::Body;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::principal::Principal;

use crate::application::token::{TokenKind, TokenService};
use crate::domain::repository::{RevokedTokenRepository, UserRepository};
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + RevokedTokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

/// Pull the bearer token out of the Authorization header
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware that requires a valid, unrevoked access token.
///
/// On success the caller's [`Principal`] is inserted into request
/// extensions for downstream handlers.
pub async fn require_auth<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + RevokedTokenRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(req.headers())
        .ok_or_else(|| AuthError::MissingToken.into_response())?;

    let claims = state
        .tokens
        .verify(token, TokenKind::Access)
        .map_err(IntoResponse::into_response)?;

    let revoked = state
        .repo
        .is_revoked(claims.jti)
        .await
        .map_err(IntoResponse::into_response)?;
    if revoked {
        return Err(AuthError::TokenRevoked.into_response());
    }

    let user_id = claims.user_id().map_err(IntoResponse::into_response)?;

    let user = state
        .repo
        .find_by_id(&user_id)
        .await
        .map_err(IntoResponse::into_response)?
        .ok_or_else(|| AuthError::InvalidCredentials.into_response())?;

    if !user.can_login() {
        return Err(AuthError::AccountDisabled.into_response());
    }

    req.extensions_mut().insert(Principal::new(user.user_id));

    Ok(next.run(req).await)
}
