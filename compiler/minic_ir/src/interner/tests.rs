use super::*;
use pretty_assertions::assert_eq;

#[test]
fn interning_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("factorial");
    let b = interner.intern("factorial");
    let c = interner.intern("main");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.lookup(a), "factorial");
    assert_eq!(interner.lookup(c), "main");
}

#[test]
fn empty_string_is_preinterned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert_eq!(interner.len(), 1);
}

#[test]
fn shared_interner_sees_same_names() {
    let shared = SharedInterner::new();
    let other = shared.clone();
    let x = shared.intern("x");
    assert_eq!(other.intern("x"), x);
    assert_eq!(other.lookup(x), "x");
}

#[test]
fn many_names_stay_distinct() {
    let interner = StringInterner::new();
    let names: Vec<Name> = (0..500).map(|i| interner.intern(&format!("v{i}"))).collect();
    for (i, name) in names.iter().enumerate() {
        assert_eq!(interner.lookup(*name), format!("v{i}"));
    }
    assert_eq!(interner.len(), 501);
}
