//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{CalculationId, UserId};

use crate::domain::operation::Operation;
use crate::error::CalcResult;

/// A stored calculation owned by a single user.
///
/// `result` is derived from `(operation, inputs)` at construction and on
/// every inputs update; it is never accepted from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub calculation_id: CalculationId,
    pub owner_id: UserId,
    pub operation: Operation,
    pub inputs: Vec<f64>,
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Calculation {
    /// Validate, evaluate, and construct in one step.
    pub fn new(owner_id: UserId, operation: Operation, inputs: Vec<f64>) -> CalcResult<Self> {
        let result = operation.evaluate(&inputs)?;
        let now = Utc::now();
        Ok(Self {
            calculation_id: CalculationId::new(),
            owner_id,
            operation,
            inputs,
            result,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the operand list, re-validating and re-computing the result.
    ///
    /// The operation type is immutable after creation; only inputs change.
    pub fn update_inputs(&mut self, inputs: Vec<f64>) -> CalcResult<()> {
        let result = self.operation.evaluate(&inputs)?;
        self.inputs = inputs;
        self.result = result;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use kernel::id::Id;

    fn owner() -> UserId {
        Id::new()
    }

    #[test]
    fn test_new_computes_result() {
        let calc = Calculation::new(owner(), Operation::Addition, vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(calc.result, 6.0);
        assert_eq!(calc.operation, Operation::Addition);
        assert_eq!(calc.created_at, calc.updated_at);
    }

    #[test]
    fn test_new_rejects_invalid_inputs() {
        assert!(matches!(
            Calculation::new(owner(), Operation::Division, vec![10.0, 0.0]),
            Err(CalcError::DivisionByZero)
        ));
        assert!(matches!(
            Calculation::new(owner(), Operation::Exponentiation, vec![2.0]),
            Err(CalcError::Arity(_))
        ));
    }

    #[test]
    fn test_update_inputs_recomputes() {
        let mut calc = Calculation::new(owner(), Operation::Division, vec![100.0, 5.0]).unwrap();
        assert_eq!(calc.result, 20.0);

        calc.update_inputs(vec![100.0, 5.0, 2.0]).unwrap();
        assert_eq!(calc.result, 10.0);
        assert!(calc.updated_at >= calc.created_at);
    }

    #[test]
    fn test_failed_update_leaves_entity_untouched() {
        let mut calc = Calculation::new(owner(), Operation::Division, vec![100.0, 5.0]).unwrap();
        let before = calc.clone();

        assert!(calc.update_inputs(vec![100.0, 0.0]).is_err());
        assert_eq!(calc, before);
    }
}
