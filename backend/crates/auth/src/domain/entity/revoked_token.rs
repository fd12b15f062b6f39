//! RevokedToken Entity
//!
//! A token `jti` revoked by logout. Rows are kept until the token's own
//! expiry passes, then swept by the startup cleanup.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Revoked token record
#[derive(Debug, Clone)]
pub struct RevokedToken {
    /// The JWT ID claim of the revoked token
    pub jti: Uuid,
    /// When the token itself expires (revocation can be dropped after this)
    pub expires_at: DateTime<Utc>,
    /// When the token was revoked
    pub revoked_at: DateTime<Utc>,
}

impl RevokedToken {
    /// Record a revocation for a token expiring at `expires_at`
    pub fn new(jti: Uuid, expires_at: DateTime<Utc>) -> Self {
        Self {
            jti,
            expires_at,
            revoked_at: Utc::now(),
        }
    }

    /// Whether the underlying token has already expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_revoked_token_expiry() {
        let live = RevokedToken::new(Uuid::new_v4(), Utc::now() + Duration::hours(1));
        assert!(!live.is_expired());

        let stale = RevokedToken::new(Uuid::new_v4(), Utc::now() - Duration::seconds(1));
        assert!(stale.is_expired());
    }
}
