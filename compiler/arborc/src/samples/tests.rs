use super::*;
use arbor_eval::{evaluate, evaluate_with_globals, EvalError};
use arbor_fmt::format_expr;
use pretty_assertions::assert_eq;

fn render(program: &Program) -> String {
    format_expr(&program.arena, &program.interner, program.root)
}

#[test]
fn test_let_sample() {
    let program = let_sample();
    assert_eq!(render(&program), "let x = (1 + 2) + x");
    assert_eq!(
        evaluate(&program.arena, &program.interner, program.root),
        Ok(6)
    );
}

#[test]
fn test_shadow_sample() {
    let program = shadow_sample();
    assert_eq!(render(&program), "let x = 1 in (x + let x = 2 in x)");
    assert_eq!(
        evaluate(&program.arena, &program.interner, program.root),
        Ok(3)
    );
}

#[test]
fn test_division_sample() {
    let program = division_sample();
    assert_eq!(render(&program), "((7 / 2) * 10)");
    assert_eq!(
        evaluate(&program.arena, &program.interner, program.root),
        Ok(30)
    );
}

#[test]
fn test_free_sample_needs_seeding() {
    let program = free_sample();
    assert_eq!(render(&program), "(x * (x + 1))");
    assert_eq!(
        evaluate(&program.arena, &program.interner, program.root),
        Err(EvalError::UnknownVariable {
            name: "x".to_string()
        })
    );

    let x = program.interner.intern("x");
    assert_eq!(
        evaluate_with_globals(&program.arena, &program.interner, program.root, [(x, 5)]),
        Ok(30)
    );
}

#[test]
fn test_unsupported_sample() {
    let program = unsupported_sample();
    assert_eq!(render(&program), "(1 % 2)");
    assert_eq!(
        evaluate(&program.arena, &program.interner, program.root),
        Err(EvalError::UnknownOperator {
            token: "%".to_string()
        })
    );
}

#[test]
fn test_find_knows_every_sample() {
    for sample in all() {
        assert!(find(sample.name).is_some());
    }
    assert!(find("nope").is_none());
}
