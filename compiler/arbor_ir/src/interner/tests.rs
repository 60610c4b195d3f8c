use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_round_trip() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(interner.resolve(x), "x");
}

#[test]
fn test_intern_deduplicates() {
    let interner = StringInterner::new();
    let a = interner.intern("total");
    let b = interner.intern("total");
    assert_eq!(a, b);
}

#[test]
fn test_distinct_strings_distinct_names() {
    let interner = StringInterner::new();
    let a = interner.intern("x");
    let b = interner.intern("y");
    assert_ne!(a, b);
}

#[test]
fn test_empty_string_is_name_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.resolve(Name::EMPTY), "");
}

#[test]
fn test_operator_tokens_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();
    for token in ["+", "-", "*", "/"] {
        interner.intern(token);
    }
    // Pre-interned tokens must not grow the table.
    assert_eq!(interner.len(), before);
}

#[test]
fn test_is_empty_tracks_user_strings() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    interner.intern("x");
    assert!(!interner.is_empty());
}
