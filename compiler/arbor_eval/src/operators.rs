//! Binary operator dispatch for the evaluator.
//!
//! The supported operator set is fixed, so dispatch is direct comparison
//! against pre-interned token names rather than string matching. Tokens
//! outside the set are rejected here, at evaluation time — nodes carry
//! whatever token they were built with.

use arbor_ir::{Name, StringInterner};

use crate::errors::{division_by_zero, integer_overflow, unknown_operator, EvalResult};
use crate::Value;

/// Pre-interned operator token names.
///
/// Interned once at interpreter construction so that operator dispatch is a
/// single `u32 == u32` check per candidate instead of a string lookup.
#[derive(Clone, Copy)]
pub struct OpTokens {
    add: Name,
    sub: Name,
    mul: Name,
    div: Name,
}

impl OpTokens {
    /// Resolve the four supported tokens against an interner.
    pub fn new(interner: &StringInterner) -> Self {
        OpTokens {
            add: interner.intern("+"),
            sub: interner.intern("-"),
            mul: interner.intern("*"),
            div: interner.intern("/"),
        }
    }
}

/// Checked arithmetic with overflow surfaced as an error.
#[inline]
fn checked_arith(result: Option<Value>, operation: &'static str) -> EvalResult {
    result.ok_or_else(|| integer_overflow(operation))
}

/// Evaluate one binary operation over already-evaluated operands.
///
/// Division truncates toward zero. A token outside the supported set is
/// reported with its text resolved back through the interner.
pub fn evaluate_binary(
    lhs: Value,
    rhs: Value,
    op: Name,
    tokens: OpTokens,
    interner: &StringInterner,
) -> EvalResult {
    if op == tokens.add {
        checked_arith(lhs.checked_add(rhs), "addition")
    } else if op == tokens.sub {
        checked_arith(lhs.checked_sub(rhs), "subtraction")
    } else if op == tokens.mul {
        checked_arith(lhs.checked_mul(rhs), "multiplication")
    } else if op == tokens.div {
        if rhs == 0 {
            Err(division_by_zero())
        } else {
            // The only overflowing quotient is i64::MIN / -1.
            checked_arith(lhs.checked_div(rhs), "division")
        }
    } else {
        Err(unknown_operator(interner.resolve(op)))
    }
}
