//! Unit tests for the calc crate
//!
//! Use-case level tests run against an in-memory repository.

#![cfg(test)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use kernel::id::{CalculationId, Id, UserId};

use crate::application::{
    CreateCalculationInput, CreateCalculationUseCase, DeleteCalculationUseCase,
    GetCalculationUseCase, ListCalculationsUseCase, ReportUseCase, UpdateCalculationInput,
    UpdateCalculationUseCase,
};
use crate::domain::entities::Calculation;
use crate::domain::repository::CalculationRepository;
use crate::error::{CalcError, CalcResult};

/// In-memory repository for use-case tests
#[derive(Default)]
struct MemCalcRepository {
    rows: Mutex<HashMap<Uuid, Calculation>>,
}

impl CalculationRepository for MemCalcRepository {
    async fn create(&self, calculation: &Calculation) -> CalcResult<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(*calculation.calculation_id.as_uuid(), calculation.clone());
        Ok(())
    }

    async fn find(
        &self,
        owner_id: &UserId,
        calculation_id: &CalculationId,
    ) -> CalcResult<Option<Calculation>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(calculation_id.as_uuid())
            .filter(|c| c.owner_id == *owner_id)
            .cloned())
    }

    async fn list(&self, owner_id: &UserId) -> CalcResult<Vec<Calculation>> {
        let mut rows: Vec<Calculation> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.owner_id == *owner_id)
            .cloned()
            .collect();
        rows.sort_by_key(|c| c.created_at);
        Ok(rows)
    }

    async fn update(&self, calculation: &Calculation) -> CalcResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(calculation.calculation_id.as_uuid()) {
            Some(existing) if existing.owner_id == calculation.owner_id => {
                *existing = calculation.clone();
                Ok(())
            }
            _ => Err(CalcError::NotFound),
        }
    }

    async fn delete(
        &self,
        owner_id: &UserId,
        calculation_id: &CalculationId,
    ) -> CalcResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get(calculation_id.as_uuid()) {
            Some(existing) if existing.owner_id == *owner_id => {
                rows.remove(calculation_id.as_uuid());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

fn repo() -> Arc<MemCalcRepository> {
    Arc::new(MemCalcRepository::default())
}

fn owner() -> UserId {
    Id::new()
}

fn create_input(operation: &str, inputs: Vec<f64>) -> CreateCalculationInput {
    CreateCalculationInput {
        operation: operation.to_string(),
        inputs,
    }
}

#[test]
fn test_create_persists_and_computes() {
    tokio_test::block_on(async {
        let repo = repo();
        let user = owner();

        let created = CreateCalculationUseCase::new(repo.clone())
            .execute(&user, create_input("Addition", vec![1.0, 2.0, 3.0]))
            .await
            .unwrap();
        assert_eq!(created.result, 6.0);

        let fetched = GetCalculationUseCase::new(repo)
            .execute(&user, &created.calculation_id)
            .await
            .unwrap();
        assert_eq!(fetched, created);
    });
}

#[test]
fn test_create_rejects_unknown_operation() {
    tokio_test::block_on(async {
        let repo = repo();
        let user = owner();

        let err = CreateCalculationUseCase::new(repo.clone())
            .execute(&user, create_input("modulo", vec![1.0, 2.0]))
            .await
            .unwrap_err();
        assert!(matches!(err, CalcError::UnknownOperationType(_)));

        // Nothing persisted
        let listed = ListCalculationsUseCase::new(repo).execute(&user).await.unwrap();
        assert!(listed.is_empty());
    });
}

#[test]
fn test_create_rejects_division_by_zero() {
    tokio_test::block_on(async {
        let repo = repo();
        let user = owner();

        let err = CreateCalculationUseCase::new(repo)
            .execute(&user, create_input("division", vec![10.0, 0.0]))
            .await
            .unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
    });
}

#[test]
fn test_records_are_owner_scoped() {
    tokio_test::block_on(async {
        let repo = repo();
        let alice = owner();
        let bob = owner();

        let created = CreateCalculationUseCase::new(repo.clone())
            .execute(&alice, create_input("multiplication", vec![2.0, 3.0]))
            .await
            .unwrap();

        let err = GetCalculationUseCase::new(repo.clone())
            .execute(&bob, &created.calculation_id)
            .await
            .unwrap_err();
        assert_eq!(err, CalcError::NotFound);

        let err = DeleteCalculationUseCase::new(repo.clone())
            .execute(&bob, &created.calculation_id)
            .await
            .unwrap_err();
        assert_eq!(err, CalcError::NotFound);

        // Still visible to its owner
        assert!(
            GetCalculationUseCase::new(repo)
                .execute(&alice, &created.calculation_id)
                .await
                .is_ok()
        );
    });
}

#[test]
fn test_update_recomputes_result() {
    tokio_test::block_on(async {
        let repo = repo();
        let user = owner();

        let created = CreateCalculationUseCase::new(repo.clone())
            .execute(&user, create_input("division", vec![100.0, 5.0]))
            .await
            .unwrap();
        assert_eq!(created.result, 20.0);

        let updated = UpdateCalculationUseCase::new(repo.clone())
            .execute(
                &user,
                &created.calculation_id,
                UpdateCalculationInput {
                    inputs: vec![100.0, 5.0, 2.0],
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.result, 10.0);

        let fetched = GetCalculationUseCase::new(repo)
            .execute(&user, &created.calculation_id)
            .await
            .unwrap();
        assert_eq!(fetched.result, 10.0);
    });
}

#[test]
fn test_failed_update_leaves_stored_row_unchanged() {
    tokio_test::block_on(async {
        let repo = repo();
        let user = owner();

        let created = CreateCalculationUseCase::new(repo.clone())
            .execute(&user, create_input("division", vec![100.0, 5.0]))
            .await
            .unwrap();

        let err = UpdateCalculationUseCase::new(repo.clone())
            .execute(
                &user,
                &created.calculation_id,
                UpdateCalculationInput {
                    inputs: vec![100.0, 0.0],
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);

        let fetched = GetCalculationUseCase::new(repo)
            .execute(&user, &created.calculation_id)
            .await
            .unwrap();
        assert_eq!(fetched.inputs, vec![100.0, 5.0]);
        assert_eq!(fetched.result, 20.0);
    });
}

#[test]
fn test_delete_then_get_is_not_found() {
    tokio_test::block_on(async {
        let repo = repo();
        let user = owner();

        let created = CreateCalculationUseCase::new(repo.clone())
            .execute(&user, create_input("subtraction", vec![10.0, 3.0]))
            .await
            .unwrap();

        DeleteCalculationUseCase::new(repo.clone())
            .execute(&user, &created.calculation_id)
            .await
            .unwrap();

        let err = GetCalculationUseCase::new(repo.clone())
            .execute(&user, &created.calculation_id)
            .await
            .unwrap_err();
        assert_eq!(err, CalcError::NotFound);

        // Deleting again reports not found as well
        let err = DeleteCalculationUseCase::new(repo)
            .execute(&user, &created.calculation_id)
            .await
            .unwrap_err();
        assert_eq!(err, CalcError::NotFound);
    });
}

#[test]
fn test_report_aggregates_own_history_only() {
    tokio_test::block_on(async {
        let repo = repo();
        let alice = owner();
        let bob = owner();

        let create = CreateCalculationUseCase::new(repo.clone());
        create
            .execute(&alice, create_input("addition", vec![1.0, 2.0]))
            .await
            .unwrap();
        create
            .execute(&alice, create_input("addition", vec![1.0, 2.0, 3.0, 4.0]))
            .await
            .unwrap();
        create
            .execute(&bob, create_input("exponentiation", vec![2.0, 8.0]))
            .await
            .unwrap();

        let report = ReportUseCase::new(repo.clone()).execute(&alice).await.unwrap();
        assert_eq!(report.total_calculations, 2);
        assert_eq!(report.average_operands, 3.0);
        assert_eq!(report.most_common_type, "addition");
        assert!(report.last_calculation_at.is_some());

        let empty = ReportUseCase::new(repo).execute(&owner()).await.unwrap();
        assert_eq!(empty.total_calculations, 0);
        assert_eq!(empty.most_common_type, "N/A");
        assert_eq!(empty.last_calculation_at, None);
    });
}
