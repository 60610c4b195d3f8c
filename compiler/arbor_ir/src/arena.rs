//! Flat expression arena.
//!
//! The arena is the single owner of every node. Constructors only ever link
//! already-allocated ids as children of a newer node, so the strict-tree
//! shape (no sharing from a node's perspective, no cycles) is structural.

use crate::{Expr, ExprId, Name};

/// Convert an arena length to a u32 id, panicking past the index space.
fn to_u32(len: usize, what: &str) -> u32 {
    match u32::try_from(len) {
        Ok(n) => n,
        Err(_) => panic!("too many {what}: {len} exceeds u32 index space"),
    }
}

/// Arena for expression nodes.
///
/// Append-only contiguous storage addressed by [`ExprId`]. Trees are
/// immutable once built: there is no way to overwrite or remove a node.
#[derive(Clone, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        ExprArena { exprs: Vec::new() }
    }

    /// Create an arena pre-allocated for an estimated node count.
    pub fn with_capacity(nodes: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(nodes),
        }
    }

    /// Allocate a node, returning its id.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(expr);
        id
    }

    /// Get the node for an id.
    ///
    /// The id must come from this arena; a foreign id panics.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Returns true if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    // Tree constructors. None of these validate or fail: an unsupported
    // operator token is detected at evaluation, an unbound variable at
    // lookup.

    /// Allocate an integer literal.
    pub fn int(&mut self, value: i64) -> ExprId {
        self.alloc(Expr::Int(value))
    }

    /// Allocate a variable reference.
    pub fn var(&mut self, name: Name) -> ExprId {
        self.alloc(Expr::Var(name))
    }

    /// Allocate a binary operation over two existing nodes.
    pub fn binary(&mut self, lhs: ExprId, rhs: ExprId, op: Name) -> ExprId {
        self.alloc(Expr::Binary { lhs, rhs, op })
    }

    /// Allocate a `let name = value in body` node over two existing nodes.
    pub fn let_in(&mut self, name: Name, value: ExprId, body: ExprId) -> ExprId {
        self.alloc(Expr::Let { name, value, body })
    }
}

impl Default for ExprArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
