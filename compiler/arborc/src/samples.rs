//! Built-in sample programs.
//!
//! Each sample builds a fresh arena/interner pair the same way a library
//! caller would.

use arbor_ir::{ExprArena, ExprId, StringInterner};

/// A fully built program: its arena, the interner its names resolve
/// through, and the root node.
pub struct Program {
    pub arena: ExprArena,
    pub interner: StringInterner,
    pub root: ExprId,
}

/// A named builder for a built-in program.
pub struct Sample {
    pub name: &'static str,
    pub summary: &'static str,
    build: fn() -> Program,
}

impl Sample {
    /// Build a fresh copy of the program.
    pub fn build(&self) -> Program {
        (self.build)()
    }
}

const SAMPLES: [Sample; 5] = [
    Sample {
        name: "let",
        summary: "a let binding feeding an addition",
        build: let_sample,
    },
    Sample {
        name: "shadow",
        summary: "inner binding shadows the outer one without leaking",
        build: shadow_sample,
    },
    Sample {
        name: "division",
        summary: "truncating integer division",
        build: division_sample,
    },
    Sample {
        name: "free",
        summary: "free variable, seed it with x=<int>",
        build: free_sample,
    },
    Sample {
        name: "unsupported",
        summary: "modulo token, rejected at evaluation",
        build: unsupported_sample,
    },
];

/// All built-in samples, in listing order.
pub fn all() -> &'static [Sample] {
    &SAMPLES
}

/// Find a sample by name.
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name == name)
}

/// `let x = 3 in ((1 + 2) + x)`
fn let_sample() -> Program {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let x = interner.intern("x");
    let plus = interner.intern("+");

    let one = arena.int(1);
    let two = arena.int(2);
    let sum = arena.binary(one, two, plus);
    let x_ref = arena.var(x);
    let body = arena.binary(sum, x_ref, plus);
    let three = arena.int(3);
    let root = arena.let_in(x, three, body);

    Program {
        arena,
        interner,
        root,
    }
}

/// `let x = 1 in (x + let x = 2 in x)`
fn shadow_sample() -> Program {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let x = interner.intern("x");

    let one = arena.int(1);
    let two = arena.int(2);
    let outer_ref = arena.var(x);
    let inner_ref = arena.var(x);
    let inner = arena.let_in(x, two, inner_ref);
    let body = arena.binary(outer_ref, inner, interner.intern("+"));
    let root = arena.let_in(x, one, body);

    Program {
        arena,
        interner,
        root,
    }
}

/// `((7 / 2) * 10)`
fn division_sample() -> Program {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();

    let seven = arena.int(7);
    let two = arena.int(2);
    let quotient = arena.binary(seven, two, interner.intern("/"));
    let ten = arena.int(10);
    let root = arena.binary(quotient, ten, interner.intern("*"));

    Program {
        arena,
        interner,
        root,
    }
}

/// `(x * (x + 1))` — `x` is free and must be seeded by the caller.
fn free_sample() -> Program {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let x = interner.intern("x");

    let lhs = arena.var(x);
    let x_ref = arena.var(x);
    let one = arena.int(1);
    let succ = arena.binary(x_ref, one, interner.intern("+"));
    let root = arena.binary(lhs, succ, interner.intern("*"));

    Program {
        arena,
        interner,
        root,
    }
}

/// `(1 % 2)` — constructible, rejected when evaluated.
fn unsupported_sample() -> Program {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();

    let one = arena.int(1);
    let two = arena.int(2);
    let root = arena.binary(one, two, interner.intern("%"));

    Program {
        arena,
        interner,
        root,
    }
}

#[cfg(test)]
mod tests;
