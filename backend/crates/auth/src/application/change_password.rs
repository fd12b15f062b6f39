//! Change Password Use Case
//!
//! Verifies the current password before storing a new hash.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserPassword;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;
use platform::password::ClearTextPassword;

/// Change password input
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ChangePasswordUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, user_id: &UserId, input: ChangePasswordInput) -> AuthResult<()> {
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // A malformed current password can never match the stored hash
        let current = ClearTextPassword::new(input.current_password)
            .map_err(|_| AuthError::CurrentPasswordIncorrect)?;

        if !user.password.verify(&current, self.config.pepper()) {
            return Err(AuthError::CurrentPasswordIncorrect);
        }

        let new_clear = ClearTextPassword::new(input.new_password)?;
        let new_password = UserPassword::from_clear_text(&new_clear, self.config.pepper())?;

        user.set_password(new_password);
        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "Password changed");

        Ok(())
    }
}
