//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, UserPassword, Username};
use crate::error::{AuthError, AuthResult};
use platform::password::ClearTextPassword;

/// Register input
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        if input.password != input.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let first_name = input.first_name.trim().to_string();
        let last_name = input.last_name.trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(AuthError::Validation(
                "First and last name are required".to_string(),
            ));
        }

        let email = Email::new(input.email)?;
        let username = Username::new(input.username)?;

        // Uniqueness checks before the expensive hash
        if self.user_repo.email_taken(&email, None).await? {
            return Err(AuthError::EmailTaken);
        }
        if self.user_repo.username_taken(&username, None).await? {
            return Err(AuthError::UsernameTaken);
        }

        let clear = ClearTextPassword::new(input.password)?;
        let password = UserPassword::from_clear_text(&clear, self.config.pepper())?;

        let user = User::new(first_name, last_name, email, username, password);
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(user)
    }
}
