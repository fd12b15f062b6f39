//! Operation Variants
//!
//! The arithmetic core: five operations, each with its own arity and
//! domain rules. Evaluation is a pure function of `(operation, inputs)`
//! with no hidden state.

use crate::error::{CalcError, CalcResult};

/// The five supported arithmetic operations.
///
/// Subtraction and division are strict left-to-right folds over the
/// operand list; order matters. Addition and multiplication are
/// order-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Exponentiation,
}

impl Operation {
    /// Resolve an operation from its name, case-insensitively.
    ///
    /// Anything outside the five known names is rejected.
    pub fn from_name(name: &str) -> CalcResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "addition" => Ok(Operation::Addition),
            "subtraction" => Ok(Operation::Subtraction),
            "multiplication" => Ok(Operation::Multiplication),
            "division" => Ok(Operation::Division),
            "exponentiation" => Ok(Operation::Exponentiation),
            other => Err(CalcError::UnknownOperationType(other.to_string())),
        }
    }

    /// The normalized (lowercase) name, as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Exponentiation => "exponentiation",
        }
    }

    /// Capitalized name used in user-facing error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
            Operation::Exponentiation => "Exponentiation",
        }
    }

    /// Validate the operand list against this operation's rules.
    ///
    /// Checks run in a fixed order: numeric well-formedness, then arity,
    /// then operation-specific domain rules. Division rejects a zero in
    /// any position after the first before touching any arithmetic.
    pub fn validate(&self, inputs: &[f64]) -> CalcResult<()> {
        if inputs.iter().any(|v| !v.is_finite()) {
            return Err(CalcError::InvalidInputs);
        }

        match self {
            Operation::Exponentiation => {
                if inputs.len() != 2 {
                    return Err(CalcError::Arity(
                        "Exponentiation requires exactly two numbers".to_string(),
                    ));
                }
            }
            _ => {
                if inputs.len() < 2 {
                    return Err(CalcError::Arity(format!(
                        "{} requires at least two numbers",
                        self.display_name()
                    )));
                }
            }
        }

        if *self == Operation::Division && inputs[1..].iter().any(|v| *v == 0.0) {
            return Err(CalcError::DivisionByZero);
        }

        Ok(())
    }

    /// Validate, then compute the result.
    pub fn evaluate(&self, inputs: &[f64]) -> CalcResult<f64> {
        self.validate(inputs)?;

        let result = match self {
            Operation::Addition => inputs.iter().sum(),
            Operation::Subtraction => inputs[1..].iter().fold(inputs[0], |acc, v| acc - v),
            Operation::Multiplication => inputs.iter().product(),
            Operation::Division => inputs[1..].iter().fold(inputs[0], |acc, v| acc / v),
            Operation::Exponentiation => inputs[0].powf(inputs[1]),
        };

        Ok(result)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Operation::from_name("addition").unwrap(), Operation::Addition);
        assert_eq!(Operation::from_name("ADDITION").unwrap(), Operation::Addition);
        assert_eq!(
            Operation::from_name("Exponentiation").unwrap(),
            Operation::Exponentiation
        );
        assert_eq!(
            Operation::from_name("  division  ").unwrap(),
            Operation::Division
        );
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert!(matches!(
            Operation::from_name("modulo"),
            Err(CalcError::UnknownOperationType(_))
        ));
        assert!(matches!(
            Operation::from_name(""),
            Err(CalcError::UnknownOperationType(_))
        ));
    }

    #[test]
    fn test_addition() {
        assert_eq!(Operation::Addition.evaluate(&[1.0, 2.0]).unwrap(), 3.0);
        assert_eq!(
            Operation::Addition.evaluate(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            10.0
        );
        assert_eq!(Operation::Addition.evaluate(&[-5.0, 5.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_subtraction_is_left_fold() {
        assert_eq!(Operation::Subtraction.evaluate(&[10.0, 3.0]).unwrap(), 7.0);
        assert_eq!(
            Operation::Subtraction.evaluate(&[10.0, 3.0, 2.0]).unwrap(),
            5.0
        );
        // Order-sensitive
        assert_eq!(
            Operation::Subtraction.evaluate(&[3.0, 10.0]).unwrap(),
            -7.0
        );
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(
            Operation::Multiplication.evaluate(&[2.0, 3.0, 4.0]).unwrap(),
            24.0
        );
        assert_eq!(
            Operation::Multiplication.evaluate(&[2.0, 0.0]).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_division_is_left_fold() {
        assert_eq!(Operation::Division.evaluate(&[10.0, 2.0]).unwrap(), 5.0);
        assert_eq!(
            Operation::Division.evaluate(&[100.0, 5.0, 2.0]).unwrap(),
            10.0
        );
    }

    #[test]
    fn test_division_by_zero_any_position() {
        assert_eq!(
            Operation::Division.evaluate(&[10.0, 0.0]),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operation::Division.evaluate(&[10.0, 2.0, 0.0, 5.0]),
            Err(CalcError::DivisionByZero)
        );
        // Zero as the first operand is fine
        assert_eq!(Operation::Division.evaluate(&[0.0, 5.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_exponentiation() {
        assert_eq!(
            Operation::Exponentiation.evaluate(&[2.0, 8.0]).unwrap(),
            256.0
        );
        assert_eq!(
            Operation::Exponentiation.evaluate(&[2.0, -2.0]).unwrap(),
            0.25
        );
    }

    #[test]
    fn test_exponent_zero_is_one_for_any_base() {
        assert_eq!(
            Operation::Exponentiation.evaluate(&[5.0, 0.0]).unwrap(),
            1.0
        );
        assert_eq!(
            Operation::Exponentiation.evaluate(&[0.0, 0.0]).unwrap(),
            1.0
        );
        assert_eq!(
            Operation::Exponentiation.evaluate(&[-3.0, 0.0]).unwrap(),
            1.0
        );
    }

    #[test]
    fn test_negative_exponent_is_reciprocal() {
        let positive = Operation::Exponentiation.evaluate(&[3.0, 4.0]).unwrap();
        let negative = Operation::Exponentiation.evaluate(&[3.0, -4.0]).unwrap();
        assert!((negative - 1.0 / positive).abs() < 1e-12);
    }

    #[test]
    fn test_arity_boundaries() {
        for op in [
            Operation::Addition,
            Operation::Subtraction,
            Operation::Multiplication,
            Operation::Division,
        ] {
            assert!(op.validate(&[1.0, 2.0]).is_ok());
            assert!(matches!(op.validate(&[1.0]), Err(CalcError::Arity(_))));
            assert!(matches!(op.validate(&[]), Err(CalcError::Arity(_))));
        }

        assert!(Operation::Exponentiation.validate(&[2.0, 3.0]).is_ok());
        assert!(matches!(
            Operation::Exponentiation.validate(&[2.0]),
            Err(CalcError::Arity(_))
        ));
        assert!(matches!(
            Operation::Exponentiation.validate(&[2.0, 3.0, 4.0]),
            Err(CalcError::Arity(_))
        ));
    }

    #[test]
    fn test_arity_error_messages() {
        assert_eq!(
            Operation::Addition.validate(&[1.0]),
            Err(CalcError::Arity(
                "Addition requires at least two numbers".to_string()
            ))
        );
        assert_eq!(
            Operation::Exponentiation.validate(&[2.0]),
            Err(CalcError::Arity(
                "Exponentiation requires exactly two numbers".to_string()
            ))
        );
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert_eq!(
            Operation::Addition.evaluate(&[1.0, f64::NAN]),
            Err(CalcError::InvalidInputs)
        );
        assert_eq!(
            Operation::Multiplication.evaluate(&[f64::INFINITY, 2.0]),
            Err(CalcError::InvalidInputs)
        );
    }

    #[test]
    fn test_numeric_check_runs_before_arity() {
        // A single NaN operand reports the type error, not the arity error
        assert_eq!(
            Operation::Addition.validate(&[f64::NAN]),
            Err(CalcError::InvalidInputs)
        );
    }

    #[test]
    fn test_arity_check_runs_before_division_domain() {
        assert!(matches!(
            Operation::Division.validate(&[0.0]),
            Err(CalcError::Arity(_))
        ));
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let first = Operation::Division.evaluate(&[7.0, 3.0, 1.5]).unwrap();
        let second = Operation::Division.evaluate(&[7.0, 3.0, 1.5]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_name_round_trip() {
        for op in [
            Operation::Addition,
            Operation::Subtraction,
            Operation::Multiplication,
            Operation::Division,
            Operation::Exponentiation,
        ] {
            assert_eq!(Operation::from_name(op.as_str()).unwrap(), op);
        }
    }
}
