//! Update Profile Use Case
//!
//! Partial update of the current user's profile. Email/username moves are
//! rejected when another account already holds the value.

use std::sync::Arc;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, Username};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Update profile input; `None` fields are left untouched
#[derive(Default)]
pub struct UpdateProfileInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: &UserId, input: UpdateProfileInput) -> AuthResult<User> {
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(email) = input.email {
            let email = Email::new(email)?;
            // Unchanged email is not a conflict with itself
            if self.user_repo.email_taken(&email, Some(user_id)).await? {
                return Err(AuthError::EmailTaken);
            }
            user.set_email(email);
        }

        if let Some(username) = input.username {
            let username = Username::new(username)?;
            if self
                .user_repo
                .username_taken(&username, Some(user_id))
                .await?
            {
                return Err(AuthError::UsernameTaken);
            }
            user.set_username(username);
        }

        if input.first_name.is_some() || input.last_name.is_some() {
            user.set_name(input.first_name, input.last_name);
        }

        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "Profile updated");

        Ok(user)
    }
}
