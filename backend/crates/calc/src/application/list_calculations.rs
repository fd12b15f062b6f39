//! List Calculations Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::Calculation;
use crate::domain::repository::CalculationRepository;
use crate::error::CalcResult;

/// List calculations use case
pub struct ListCalculationsUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
}

impl<R> ListCalculationsUseCase<R>
where
    R: CalculationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: &UserId) -> CalcResult<Vec<Calculation>> {
        self.repo.list(owner_id).await
    }
}
