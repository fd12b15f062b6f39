//! Domain Entities

pub mod revoked_token;
pub mod user;

pub use revoked_token::RevokedToken;
pub use user::User;
