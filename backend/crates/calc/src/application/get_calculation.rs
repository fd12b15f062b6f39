//! Get Calculation Use Case

use std::sync::Arc;

use kernel::id::{CalculationId, UserId};

use crate::domain::entities::Calculation;
use crate::domain::repository::CalculationRepository;
use crate::error::{CalcError, CalcResult};

/// Get calculation use case
pub struct GetCalculationUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
}

impl<R> GetCalculationUseCase<R>
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
    ) -> CalcResult<Calculation> {
        self.repo
            .find(owner_id, calculation_id)
            .await?
            .ok_or(CalcError::NotFound)
    }
}
