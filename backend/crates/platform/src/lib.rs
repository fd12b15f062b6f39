//! Platform - shared technical capabilities
//!
//! Domain-agnostic building blocks used by the backend crates.
//! Currently this is password handling; anything here must be free of
//! business rules.

pub mod password;
