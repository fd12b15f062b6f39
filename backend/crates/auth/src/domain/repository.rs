//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{RevokedToken, User};
use crate::domain::value_object::{Email, Username};
use crate::error::AuthResult;
use kernel::id::UserId;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<User>>;

    /// Check if email is taken by a user other than `except`
    async fn email_taken(&self, email: &Email, except: Option<&UserId>) -> AuthResult<bool>;

    /// Check if username is taken by a user other than `except`
    async fn username_taken(&self, username: &Username, except: Option<&UserId>)
    -> AuthResult<bool>;

    /// Update profile fields and password hash
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Revoked token repository trait
#[trait_variant::make(RevokedTokenRepository: Send)]
pub trait LocalRevokedTokenRepository {
    /// Record a revocation
    async fn revoke(&self, token: &RevokedToken) -> AuthResult<()>;

    /// Check whether a `jti` has been revoked
    async fn is_revoked(&self, jti: Uuid) -> AuthResult<bool>;

    /// Remove revocations whose tokens have expired anyway
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
