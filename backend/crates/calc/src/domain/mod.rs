//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Operation variants (the arithmetic core)
//! - Domain entities (Calculation)
//! - Domain services (usage report aggregation)
//! - Repository traits (interfaces)

pub mod entities;
pub mod operation;
pub mod repository;
pub mod services;
