use super::*;

#[test]
fn test_expr_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();

    set.insert(Expr::Int(42));
    set.insert(Expr::Int(42));
    set.insert(Expr::Int(43));
    set.insert(Expr::Var(Name::from_raw(1)));

    assert_eq!(set.len(), 3);
}

#[test]
fn test_expr_eq() {
    let a = Expr::Binary {
        lhs: ExprId::new(0),
        rhs: ExprId::new(1),
        op: Name::from_raw(1),
    };
    let b = Expr::Binary {
        lhs: ExprId::new(0),
        rhs: ExprId::new(1),
        op: Name::from_raw(2),
    };
    assert_eq!(a, a);
    assert_ne!(a, b);
}
