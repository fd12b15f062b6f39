//! Calc (Calculation History) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Operation variants, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Evaluation Model
//! - Five arithmetic operations, each with its own arity and domain rules
//! - `result` is always derived from `(operation, inputs)`, never supplied
//!   by the caller
//! - Evaluation is pure and deterministic; identical inputs always yield
//!   an identical result
//! - Records are scoped to their owner; one user can never read or touch
//!   another user's history

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::operation::Operation;
pub use error::{CalcError, CalcResult};
pub use infra::postgres::PgCalcRepository;
pub use presentation::router::calc_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::services::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCalcRepository as CalcStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

mod tests;
