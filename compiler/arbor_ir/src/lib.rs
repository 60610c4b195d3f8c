//! Arbor IR - Expression Tree Types
//!
//! This crate contains the core data structures for the Arbor interpreter:
//! - Names for interned identifiers and operator tokens
//! - `Expr` nodes for the four expression kinds
//! - Arena allocation for expressions
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Flatten Everything**: No Box<Expr>, use `ExprId(u32)` indices
//!
//! Trees are append-only: a node can only reference ids allocated before it,
//! so a well-formed arena can never contain a cycle.

mod arena;
mod ast;
mod expr_id;
mod interner;
mod name;

pub use arena::ExprArena;
pub use ast::Expr;
pub use expr_id::ExprId;
pub use interner::StringInterner;
pub use name::Name;
