//! PostgreSQL Repository Implementation

use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::{CalculationId, UserId};

use crate::domain::entities::Calculation;
use crate::domain::operation::Operation;
use crate::domain::repository::CalculationRepository;
use crate::error::{CalcError, CalcResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgCalcRepository {
    pool: PgPool,
}

impl PgCalcRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CalculationRepository for PgCalcRepository {
    async fn create(&self, calculation: &Calculation) -> CalcResult<()> {
        sqlx::query(
            r#"
            INSERT INTO calculations (
                calculation_id,
                user_id,
                operation,
                inputs,
                result,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(calculation.calculation_id.as_uuid())
        .bind(calculation.owner_id.as_uuid())
        .bind(calculation.operation.as_str())
        .bind(&calculation.inputs)
        .bind(calculation.result)
        .bind(calculation.created_at)
        .bind(calculation.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(
        &self,
        owner_id: &UserId,
        calculation_id: &CalculationId,
    ) -> CalcResult<Option<Calculation>> {
        let row = sqlx::query_as::<_, CalculationRow>(
            r#"
            SELECT calculation_id, user_id, operation, inputs, result,
                   created_at, updated_at
            FROM calculations
            WHERE calculation_id = $1 AND user_id = $2
            "#,
        )
        .bind(calculation_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CalculationRow::into_calculation).transpose()
    }

    async fn list(&self, owner_id: &UserId) -> CalcResult<Vec<Calculation>> {
        let rows = sqlx::query_as::<_, CalculationRow>(
            r#"
            SELECT calculation_id, user_id, operation, inputs, result,
                   created_at, updated_at
            FROM calculations
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(CalculationRow::into_calculation)
            .collect()
    }

    async fn update(&self, calculation: &Calculation) -> CalcResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE calculations
            SET inputs = $3,
                result = $4,
                updated_at = $5
            WHERE calculation_id = $1 AND user_id = $2
            "#,
        )
        .bind(calculation.calculation_id.as_uuid())
        .bind(calculation.owner_id.as_uuid())
        .bind(&calculation.inputs)
        .bind(calculation.result)
        .bind(calculation.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CalcError::NotFound);
        }

        Ok(())
    }

    async fn delete(
        &self,
        owner_id: &UserId,
        calculation_id: &CalculationId,
    ) -> CalcResult<bool> {
        let result = sqlx::query(
            "DELETE FROM calculations WHERE calculation_id = $1 AND user_id = $2",
        )
        .bind(calculation_id.as_uuid())
        .bind(owner_id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CalculationRow {
    calculation_id: Uuid,
    user_id: Uuid,
    operation: String,
    inputs: Vec<f64>,
    result: f64,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl CalculationRow {
    fn into_calculation(self) -> CalcResult<Calculation> {
        // Stored names are normalized; a mismatch means corrupt data
        let operation = Operation::from_name(&self.operation)
            .map_err(|_| CalcError::Internal(format!("Bad operation in row: {}", self.operation)))?;

        Ok(Calculation {
            calculation_id: CalculationId::from_uuid(self.calculation_id),
            owner_id: UserId::from_uuid(self.user_id),
            operation,
            inputs: self.inputs,
            result: self.result,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
