//! User Entity
//!
//! Core user entity: profile fields plus the password hash.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{Email, UserPassword, Username};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email (unique, lowercase)
    pub email: Email,
    /// Username (unique, lowercase, for login)
    pub username: Username,
    /// Argon2id password hash
    pub password: UserPassword,
    /// Disabled accounts cannot authenticate
    pub is_active: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user
    pub fn new(
        first_name: String,
        last_name: String,
        email: Email,
        username: Username,
        password: UserPassword,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            first_name,
            last_name,
            email,
            username,
            password,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if user can authenticate
    pub fn can_login(&self) -> bool {
        self.is_active
    }

    /// Update given/family name
    pub fn set_name(&mut self, first_name: Option<String>, last_name: Option<String>) {
        if let Some(first) = first_name {
            self.first_name = first;
        }
        if let Some(last) = last_name {
            self.last_name = last;
        }
        self.updated_at = Utc::now();
    }

    /// Update email
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Update username
    pub fn set_username(&mut self, username: Username) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Replace the password hash
    pub fn set_password(&mut self, password: UserPassword) {
        self.password = password;
        self.updated_at = Utc::now();
    }
}
