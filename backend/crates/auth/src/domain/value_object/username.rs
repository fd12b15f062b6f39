//! Username Value Object
//!
//! Unique handle used for login. Stored lowercase.

use crate::error::{AuthError, AuthResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Minimum username length
const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum username length
const USERNAME_MAX_LENGTH: usize = 32;

/// Username value object
///
/// Allowed characters: ASCII alphanumerics, `_`, `-`, `.`,
/// and the first character must be alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a new username with validation
    pub fn new(username: impl Into<String>) -> AuthResult<Self> {
        let username = username.into().trim().to_lowercase();

        let char_count = username.chars().count();

        if char_count < USERNAME_MIN_LENGTH {
            return Err(AuthError::Validation(format!(
                "Username must be at least {} characters",
                USERNAME_MIN_LENGTH
            )));
        }

        if char_count > USERNAME_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "Username must be at most {} characters",
                USERNAME_MAX_LENGTH
            )));
        }

        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        {
            return Err(AuthError::Validation(
                "Username may only contain letters, digits, '_', '-' and '.'".to_string(),
            ));
        }

        // First character must be alphanumeric
        if !username
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric())
        {
            return Err(AuthError::Validation(
                "Username must start with a letter or digit".to_string(),
            ));
        }

        Ok(Self(username))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    /// Get the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl FromStr for Username {
    type Err = AuthError;

    fn from_str(s: &str) -> AuthResult<Self> {
        Username::new(s)
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
