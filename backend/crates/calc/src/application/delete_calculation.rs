//! Delete Calculation Use Case

use std::sync::Arc;

use kernel::id::{CalculationId, UserId};

use crate::domain::repository::CalculationRepository;
use crate::error::{CalcError, CalcResult};

/// Delete calculation use case
pub struct DeleteCalculationUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteCalculationUseCase<R>
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
    ) -> CalcResult<()> {
        let deleted = self.repo.delete(owner_id, calculation_id).await?;
        if !deleted {
            return Err(CalcError::NotFound);
        }

        tracing::info!(calculation_id = %calculation_id, "Calculation deleted");

        Ok(())
    }
}
