//! Core rendering pass.

use arbor_ir::{Expr, ExprArena, ExprId, StringInterner};

/// Single-pass renderer appending to one output buffer.
///
/// Children are rendered before their enclosing punctuation is appended,
/// so output order mirrors the recursive structure of the tree.
pub struct Formatter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    out: String,
}

impl<'a> Formatter<'a> {
    /// Create a formatter over an arena and the interner its names resolve
    /// through.
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Formatter {
            arena,
            interner,
            out: String::new(),
        }
    }

    /// Append the rendering of the node at `id`.
    pub fn write_expr(&mut self, id: ExprId) {
        match *self.arena.get(id) {
            Expr::Int(value) => {
                self.out.push_str(&value.to_string());
            }
            Expr::Var(name) => {
                self.out.push_str(self.interner.resolve(name));
            }
            Expr::Binary { lhs, rhs, op } => {
                self.out.push('(');
                self.write_expr(lhs);
                self.out.push(' ');
                self.out.push_str(self.interner.resolve(op));
                self.out.push(' ');
                self.write_expr(rhs);
                self.out.push(')');
            }
            Expr::Let { name, value, body } => {
                self.out.push_str("let ");
                self.out.push_str(self.interner.resolve(name));
                self.out.push_str(" = ");
                self.write_expr(value);
                self.out.push_str(" in ");
                self.write_expr(body);
            }
        }
    }

    /// Consume the formatter, returning the rendered text.
    pub fn finish(self) -> String {
        self.out
    }
}

/// Render the tree rooted at `root` to a single line.
pub fn format_expr(arena: &ExprArena, interner: &StringInterner, root: ExprId) -> String {
    let mut formatter = Formatter::new(arena, interner);
    formatter.write_expr(root);
    formatter.finish()
}
