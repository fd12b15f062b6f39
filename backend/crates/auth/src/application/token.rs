//! Token Service
//!
//! HS256 JWT issuance and validation. Claims carry `sub` (user id),
//! `jti` (revocation handle), `iat`/`exp`, and `type` so access and
//! refresh tokens can never stand in for each other.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Token kind discriminator (the `type` claim)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// JWT claim set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Token ID, the revocation handle
    pub jti: Uuid,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Access or refresh
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

impl Claims {
    /// Parse the `sub` claim into a typed user ID
    pub fn user_id(&self) -> AuthResult<UserId> {
        UserId::parse_str(&self.sub).map_err(|_| AuthError::TokenInvalid)
    }

    /// Expiry as a chrono timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

/// Issues and validates JWTs for one configured secret
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.jwt_secret),
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            access_ttl: Duration::seconds(config.access_token_ttl_secs()),
            refresh_ttl: Duration::seconds(config.refresh_token_ttl_secs()),
        }
    }

    /// Issue a token of the given kind for a user
    pub fn issue(&self, user_id: &UserId, kind: TokenKind) -> AuthResult<String> {
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };
        self.issue_with_ttl(user_id, kind, ttl)
    }

    /// Issue with an explicit TTL (negative TTLs produce already-expired
    /// tokens, used by tests)
    pub fn issue_with_ttl(
        &self,
        user_id: &UserId,
        kind: TokenKind,
        ttl: Duration,
    ) -> AuthResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            kind,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Could not create token: {}", e)))
    }

    /// Validate a token's signature, expiry, and kind
    ///
    /// Revocation is not checked here; that requires the repository and
    /// happens in the use cases.
    pub fn verify(&self, token: &str, expected_kind: TokenKind) -> AuthResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            }
        })?;

        if data.claims.kind != expected_kind {
            return Err(AuthError::TokenInvalid);
        }

        Ok(data.claims)
    }

    /// Decode without verifying the kind (used by logout, which accepts
    /// either kind for revocation)
    pub fn verify_any(&self, token: &str) -> AuthResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::with_random_secret())
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let svc = service();
        let user_id: UserId = Id::new();

        let token = svc.issue(&user_id, TokenKind::Access).unwrap();
        assert_eq!(token.matches('.').count(), 2); // JWT format

        let claims = svc.verify(&token, TokenKind::Access).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.kind, TokenKind::Access);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let svc = service();
        let user_id: UserId = Id::new();

        let refresh = svc.issue(&user_id, TokenKind::Refresh).unwrap();
        let err = svc.verify(&refresh, TokenKind::Access).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }

    #[test]
    fn test_expired_token_rejected() {
        let svc = service();
        let user_id: UserId = Id::new();

        let token = svc
            .issue_with_ttl(&user_id, TokenKind::Access, Duration::seconds(-120))
            .unwrap();
        let err = svc.verify(&token, TokenKind::Access).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let svc = service();
        let err = svc.verify("invalid.token", TokenKind::Access).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let svc_a = service();
        let svc_b = service();
        let user_id: UserId = Id::new();

        let token = svc_a.issue(&user_id, TokenKind::Access).unwrap();
        assert!(svc_b.verify(&token, TokenKind::Access).is_err());
    }

    #[test]
    fn test_jti_unique_per_token() {
        let svc = service();
        let user_id: UserId = Id::new();

        let a = svc.issue(&user_id, TokenKind::Access).unwrap();
        let b = svc.issue(&user_id, TokenKind::Access).unwrap();
        let claims_a = svc.verify(&a, TokenKind::Access).unwrap();
        let claims_b = svc.verify(&b, TokenKind::Access).unwrap();
        assert_ne!(claims_a.jti, claims_b.jti);
    }
}
