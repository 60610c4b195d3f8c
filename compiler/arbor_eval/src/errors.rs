//! Evaluation errors and their factory constructors.
//!
//! Factory functions are the construction points for every error the
//! evaluator raises; call sites never build variants by hand, which keeps
//! message wording in one place.

use std::fmt;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// An evaluation failure.
///
/// All variants abort the current evaluation: they propagate to the caller
/// of the top-level entry point, which is responsible for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// A variable was referenced with no binding in scope.
    UnknownVariable { name: String },
    /// A binary node carried a token outside the supported operator set.
    UnknownOperator { token: String },
    /// Division with a zero right-hand operand.
    DivisionByZero,
    /// Checked arithmetic overflowed the 64-bit value range.
    IntegerOverflow { operation: &'static str },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnknownVariable { name } => write!(f, "unknown variable: {name}"),
            EvalError::UnknownOperator { token } => write!(f, "unknown operator: {token}"),
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Unknown variable reference.
#[cold]
pub fn unknown_variable(name: &str) -> EvalError {
    EvalError::UnknownVariable {
        name: name.to_string(),
    }
}

/// Unsupported operator token.
#[cold]
pub fn unknown_operator(token: &str) -> EvalError {
    EvalError::UnknownOperator {
        token: token.to_string(),
    }
}

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

/// Integer overflow in the named operation.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::IntegerOverflow { operation }
}
