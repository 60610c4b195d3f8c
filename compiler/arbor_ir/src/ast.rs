//! Expression node types.
//!
//! The node set is closed: four variants, matched exhaustively by every
//! traversal. Child links are arena ids, names and operator tokens are
//! interned.

use crate::{ExprId, Name};

/// Expression node.
///
/// `Binary::op` carries whatever token was interned at construction — it is
/// not validated against the supported operator set until evaluation, so an
/// unsupported token is representable and surfaces as an evaluation error,
/// not a construction failure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// Integer literal.
    Int(i64),
    /// Variable reference, resolved against the environment at evaluation.
    Var(Name),
    /// Binary operation over exactly two children.
    Binary {
        lhs: ExprId,
        rhs: ExprId,
        /// Interned operator token.
        op: Name,
    },
    /// `let name = value in body`; the binding is visible only in `body`.
    Let {
        name: Name,
        value: ExprId,
        body: ExprId,
    },
}

#[cfg(test)]
mod tests;
