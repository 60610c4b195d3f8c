//! Recursive-descent evaluation over the expression arena.

use arbor_ir::{Expr, ExprArena, ExprId, Name, StringInterner};

use crate::environment::Environment;
use crate::errors::{unknown_variable, EvalResult};
use crate::operators::{evaluate_binary, OpTokens};
use crate::Value;

/// Tree-walking interpreter.
///
/// Borrows the arena and interner, owns the environment for one evaluation.
/// Recursion depth is bounded by tree depth; the tree itself is never
/// mutated.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    env: Environment,
    tokens: OpTokens,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with an empty environment.
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Self::with_env(arena, interner, Environment::new())
    }

    /// Create an interpreter over a caller-built environment.
    pub fn with_env(
        arena: &'a ExprArena,
        interner: &'a StringInterner,
        env: Environment,
    ) -> Self {
        Interpreter {
            arena,
            interner,
            env,
            tokens: OpTokens::new(interner),
        }
    }

    /// Evaluate the node at `id` under the current environment.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        match *self.arena.get(id) {
            Expr::Int(value) => Ok(value),
            Expr::Var(name) => self.lookup(name),
            Expr::Binary { lhs, rhs, op } => {
                // Operand order is fixed: left before right.
                let left = self.eval(lhs)?;
                let right = self.eval(rhs)?;
                evaluate_binary(left, right, op, self.tokens, self.interner)
            }
            Expr::Let { name, value, body } => {
                let bound = self.eval(value)?;
                self.env.push_scope();
                self.env.define(name, bound);
                let result = self.eval(body);
                // Pop on the error path too: the binding's extent is exactly
                // the body.
                self.env.pop_scope();
                result
            }
        }
    }

    fn lookup(&self, name: Name) -> EvalResult {
        self.env
            .lookup(name)
            .ok_or_else(|| unknown_variable(self.interner.resolve(name)))
    }
}

/// Evaluate `root` under an empty environment.
pub fn evaluate(arena: &ExprArena, interner: &StringInterner, root: ExprId) -> EvalResult {
    Interpreter::new(arena, interner).eval(root)
}

/// Evaluate `root` with caller-seeded global bindings for free variables.
pub fn evaluate_with_globals(
    arena: &ExprArena,
    interner: &StringInterner,
    root: ExprId,
    globals: impl IntoIterator<Item = (Name, Value)>,
) -> EvalResult {
    Interpreter::with_env(arena, interner, Environment::with_globals(globals)).eval(root)
}
