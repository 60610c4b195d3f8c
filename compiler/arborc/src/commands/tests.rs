use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_binding() {
    assert_eq!(parse_binding("x=5"), Ok(("x".to_string(), 5)));
    assert_eq!(parse_binding("rate=-3"), Ok(("rate".to_string(), -3)));
}

#[test]
fn test_parse_binding_rejects_malformed() {
    assert!(parse_binding("x").is_err());
    assert!(parse_binding("=5").is_err());
    assert!(parse_binding("x=five").is_err());
}

#[test]
fn test_run_sample_with_seeded_global() {
    assert_eq!(run_sample("free", &[("x".to_string(), 5)]), Ok(()));
}

#[test]
fn test_run_sample_surfaces_eval_error() {
    let result = run_sample("unsupported", &[]);
    assert_eq!(result, Err("unknown operator: %".to_string()));
}

#[test]
fn test_unknown_sample() {
    let result = show_sample("nope");
    assert!(result.is_err());
}
