//! Create Calculation Use Case
//!
//! Resolves the operation from its name, validates and evaluates the
//! operands, and persists the resulting record.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::Calculation;
use crate::domain::operation::Operation;
use crate::domain::repository::CalculationRepository;
use crate::error::CalcResult;

/// Create input; the raw payload as the caller sent it
pub struct CreateCalculationInput {
    pub operation: String,
    pub inputs: Vec<f64>,
}

/// Create calculation use case
pub struct CreateCalculationUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCalculationUseCase<R>
where
    R: CalculationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        owner_id: &UserId,
        input: CreateCalculationInput,
    ) -> CalcResult<Calculation> {
        let operation = Operation::from_name(&input.operation)?;
        let calculation = Calculation::new(*owner_id, operation, input.inputs)?;

        self.repo.create(&calculation).await?;

        tracing::info!(
            calculation_id = %calculation.calculation_id,
            operation = %calculation.operation,
            "Calculation created"
        );

        Ok(calculation)
    }
}
