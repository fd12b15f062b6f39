//! UserPassword Value Object
//!
//! Thin domain wrapper over the platform's Argon2id password handling.
//! Holds only the PHC hash string; the clear text never enters an entity.

use crate::error::{AuthError, AuthResult};
use platform::password::{ClearTextPassword, HashedPassword};

/// Re-export for use case input validation
pub use platform::password::PasswordPolicyError;

/// Hashed user password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated clear text password
    pub fn from_clear_text(
        password: &ClearTextPassword,
        pepper: Option<&[u8]>,
    ) -> AuthResult<Self> {
        let hashed = password
            .hash(pepper)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        Ok(Self(hashed))
    }

    /// Restore from a stored PHC string
    pub fn from_phc_string(s: impl Into<String>) -> AuthResult<Self> {
        HashedPassword::from_phc_string(s)
            .map(Self)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Verify a clear text password against this hash
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(password, pepper)
    }

    /// PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }
}
