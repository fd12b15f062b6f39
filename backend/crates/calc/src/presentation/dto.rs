//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Calculation;
use crate::domain::services::UsageReport;

// ============================================================================
// Calculations
// ============================================================================

/// Create request
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationRequest {
    #[serde(rename = "type")]
    pub calculation_type: String,
    pub inputs: Vec<f64>,
}

/// Update request; only the operand list can change
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCalculationRequest {
    pub inputs: Vec<f64>,
}

/// Calculation response
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub calculation_type: String,
    pub inputs: Vec<f64>,
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Calculation> for CalculationResponse {
    fn from(calculation: &Calculation) -> Self {
        Self {
            id: *calculation.calculation_id.as_uuid(),
            calculation_type: calculation.operation.as_str().to_string(),
            inputs: calculation.inputs.clone(),
            result: calculation.result,
            created_at: calculation.created_at,
            updated_at: calculation.updated_at,
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Usage report response
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub total_calculations: u64,
    pub average_operands: f64,
    pub most_common_type: String,
    pub last_calculation_at: Option<DateTime<Utc>>,
}

impl From<UsageReport> for ReportResponse {
    fn from(report: UsageReport) -> Self {
        Self {
            total_calculations: report.total_calculations,
            average_operands: report.average_operands,
            most_common_type: report.most_common_type,
            last_calculation_at: report.last_calculation_at,
        }
    }
}
