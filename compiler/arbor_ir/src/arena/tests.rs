use super::*;
use crate::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn test_alloc_returns_sequential_ids() {
    let mut arena = ExprArena::new();
    let a = arena.alloc(Expr::Int(1));
    let b = arena.alloc(Expr::Int(2));
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(arena.len(), 2);
}

#[test]
fn test_get_round_trips() {
    let mut arena = ExprArena::new();
    let id = arena.int(42);
    assert_eq!(*arena.get(id), Expr::Int(42));
}

#[test]
fn test_constructors_build_linked_nodes() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();

    let one = arena.int(1);
    let x = arena.var(interner.intern("x"));
    let sum = arena.binary(one, x, interner.intern("+"));
    let root = arena.let_in(interner.intern("x"), one, sum);

    assert_eq!(
        *arena.get(sum),
        Expr::Binary {
            lhs: one,
            rhs: x,
            op: interner.intern("+"),
        }
    );
    assert_eq!(
        *arena.get(root),
        Expr::Let {
            name: interner.intern("x"),
            value: one,
            body: sum,
        }
    );
    assert_eq!(arena.len(), 4);
}

#[test]
fn test_unsupported_token_is_constructible() {
    // Construction never validates the token; "%" only fails at evaluation.
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();

    let lhs = arena.int(1);
    let rhs = arena.int(2);
    let id = arena.binary(lhs, rhs, interner.intern("%"));
    assert_eq!(
        *arena.get(id),
        Expr::Binary {
            lhs,
            rhs,
            op: interner.intern("%"),
        }
    );
}

#[test]
fn test_empty_arena() {
    let arena = ExprArena::new();
    assert!(arena.is_empty());
    assert_eq!(arena.len(), 0);
}
