//! Environment for variable scoping in the evaluator.
//!
//! Uses a scope stack: each `let` body evaluates under a freshly pushed
//! scope that is popped when the body finishes, so a binding's extent is
//! exactly its body and sibling subtrees never observe it. Lookup walks the
//! stack innermost-first, which is what makes an inner binding shadow an
//! outer one of the same name.

use rustc_hash::FxHashMap;

use arbor_ir::Name;

use crate::Value;

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    /// Bindings in this scope (`FxHashMap` for faster hashing with `Name` keys).
    bindings: FxHashMap<Name, Value>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
        }
    }

    /// Define a variable in this scope, replacing any existing binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a variable in this scope only.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.bindings.get(&name).copied()
    }
}

/// Environment for the evaluator.
///
/// The bottom scope is the global scope and holds caller-seeded bindings;
/// it can never be popped. Everything above it is pushed and popped around
/// `let` bodies.
#[derive(Clone, Debug)]
pub struct Environment {
    /// Stack of scopes, innermost last.
    scopes: Vec<Scope>,
}

impl Environment {
    /// Create a new environment with an empty global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::new()],
        }
    }

    /// Create an environment whose global scope holds the given bindings.
    pub fn with_globals(globals: impl IntoIterator<Item = (Name, Value)>) -> Self {
        let mut global = Scope::new();
        for (name, value) in globals {
            global.define(name, value);
        }
        Environment {
            scopes: vec![global],
        }
    }

    /// Current scope depth (1 = global scope only).
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Push a new empty scope onto the stack.
    #[inline]
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the current scope. The global scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Define a variable in the current scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        // The stack is never empty: constructors seed one scope and
        // pop_scope refuses to remove it.
        if let Some(scope) = self.scopes.last_mut() {
            scope.define(name, value);
        }
    }

    /// Look up a variable, innermost scope first.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.scopes.iter().rev().find_map(|scope| scope.lookup(name))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
