//! Domain Services
//!
//! Pure aggregation over a user's calculation history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::entities::Calculation;

/// Aggregated usage statistics for one user's history.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageReport {
    pub total_calculations: u64,
    pub average_operands: f64,
    /// Normalized operation name, or "N/A" for an empty history
    pub most_common_type: String,
    pub last_calculation_at: Option<DateTime<Utc>>,
}

/// Build a usage report from a user's calculations.
///
/// Ties on the most common type are broken by name, alphabetically.
pub fn build_report(calculations: &[Calculation]) -> UsageReport {
    if calculations.is_empty() {
        return UsageReport {
            total_calculations: 0,
            average_operands: 0.0,
            most_common_type: "N/A".to_string(),
            last_calculation_at: None,
        };
    }

    let total = calculations.len() as u64;

    let operand_count: usize = calculations.iter().map(|c| c.inputs.len()).sum();
    let average_operands = operand_count as f64 / total as f64;

    // BTreeMap iteration order makes the alphabetical tie-break free
    let mut counts: BTreeMap<&'static str, u64> = BTreeMap::new();
    for calc in calculations {
        *counts.entry(calc.operation.as_str()).or_insert(0) += 1;
    }
    let mut most_common_type = "N/A";
    let mut best = 0u64;
    for (name, count) in &counts {
        // strictly greater keeps the alphabetically first name on ties
        if *count > best {
            most_common_type = name;
            best = *count;
        }
    }
    let most_common_type = most_common_type.to_string();

    let last_calculation_at = calculations.iter().map(|c| c.created_at).max();

    UsageReport {
        total_calculations: total,
        average_operands,
        most_common_type,
        last_calculation_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::operation::Operation;
    use kernel::id::{Id, UserId};

    fn calc(operation: Operation, inputs: Vec<f64>) -> Calculation {
        let owner: UserId = Id::new();
        Calculation::new(owner, operation, inputs).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let report = build_report(&[]);
        assert_eq!(report.total_calculations, 0);
        assert_eq!(report.average_operands, 0.0);
        assert_eq!(report.most_common_type, "N/A");
        assert_eq!(report.last_calculation_at, None);
    }

    #[test]
    fn test_counts_and_average() {
        let history = vec![
            calc(Operation::Addition, vec![1.0, 2.0]),
            calc(Operation::Addition, vec![1.0, 2.0, 3.0, 4.0]),
            calc(Operation::Division, vec![10.0, 2.0]),
        ];

        let report = build_report(&history);
        assert_eq!(report.total_calculations, 3);
        assert!((report.average_operands - 8.0 / 3.0).abs() < 1e-12);
        assert_eq!(report.most_common_type, "addition");
        assert!(report.last_calculation_at.is_some());
    }

    #[test]
    fn test_most_common_tie_breaks_alphabetically() {
        let history = vec![
            calc(Operation::Division, vec![10.0, 2.0]),
            calc(Operation::Addition, vec![1.0, 2.0]),
        ];

        let report = build_report(&history);
        assert_eq!(report.most_common_type, "addition");
    }

    #[test]
    fn test_last_calculation_is_most_recent() {
        let older = calc(Operation::Addition, vec![1.0, 2.0]);
        let newer = calc(Operation::Subtraction, vec![5.0, 3.0]);

        let report = build_report(&[newer.clone(), older.clone()]);
        assert_eq!(report.last_calculation_at, Some(newer.created_at));
    }
}
