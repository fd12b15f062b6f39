//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (User, RevokedToken)
//! - Domain value objects (Email, Username, UserPassword)
//! - Repository traits (interfaces)

pub mod entity;
pub mod repository;
pub mod value_object;
