//! Usage Report Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::CalculationRepository;
use crate::domain::services::{UsageReport, build_report};
use crate::error::CalcResult;

/// Report use case
pub struct ReportUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
}

impl<R> ReportUseCase<R>
where
    R: CalculationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: &UserId) -> CalcResult<UsageReport> {
        let calculations = self.repo.list(owner_id).await?;
        Ok(build_report(&calculations))
    }
}
