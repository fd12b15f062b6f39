//! Update Calculation Use Case
//!
//! Replaces the operand list of an existing record. The operation type
//! never changes; the result is re-derived from the new inputs.

use std::sync::Arc;

use kernel::id::{CalculationId, UserId};

use crate::domain::entities::Calculation;
use crate::domain::repository::CalculationRepository;
use crate::error::{CalcError, CalcResult};

/// Update input
pub struct UpdateCalculationInput {
    pub inputs: Vec<f64>,
}

/// Update calculation use case
pub struct UpdateCalculationUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateCalculationUseCase<R>
where
    R: CalculationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        owner_id: &UserId,
        calculation_id: &CalculationId,
        input: UpdateCalculationInput,
    ) -> CalcResult<Calculation> {
        let mut calculation = self
            .repo
            .find(owner_id, calculation_id)
            .await?
            .ok_or(CalcError::NotFound)?;

        calculation.update_inputs(input.inputs)?;

        self.repo.update(&calculation).await?;

        tracing::info!(
            calculation_id = %calculation.calculation_id,
            "Calculation updated"
        );

        Ok(calculation)
    }
}
