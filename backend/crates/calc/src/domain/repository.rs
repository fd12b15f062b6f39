//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the infra layer.
//! Every operation is scoped to an owner; a record belonging to another
//! user is indistinguishable from one that does not exist.

use kernel::id::{CalculationId, UserId};

use crate::domain::entities::Calculation;
use crate::error::CalcResult;

/// Calculation repository trait
#[trait_variant::make(CalculationRepository: Send)]
pub trait LocalCalculationRepository {
    /// Persist a new calculation
    async fn create(&self, calculation: &Calculation) -> CalcResult<()>;

    /// Fetch one calculation by id, owner-scoped
    async fn find(
        &self,
        owner_id: &UserId,
        calculation_id: &CalculationId,
    ) -> CalcResult<Option<Calculation>>;

    /// List all of one owner's calculations, oldest first
    async fn list(&self, owner_id: &UserId) -> CalcResult<Vec<Calculation>>;

    /// Persist updated inputs and result
    async fn update(&self, calculation: &Calculation) -> CalcResult<()>;

    /// Delete one calculation, owner-scoped; returns whether a row existed
    async fn delete(
        &self,
        owner_id: &UserId,
        calculation_id: &CalculationId,
    ) -> CalcResult<bool>;
}
