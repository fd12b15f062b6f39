//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations and the token service.

pub mod change_password;
pub mod config;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod token;
pub mod update_profile;

pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use refresh::{RefreshOutput, RefreshUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use update_profile::{UpdateProfileInput, UpdateProfileUseCase};
