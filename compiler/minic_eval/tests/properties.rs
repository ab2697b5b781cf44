//! Behavioral properties checked through the public entry points.

use minic_eval::{evaluate, EvalConfig, EvalErrorKind, EvalResult, Environment, Value};
use minic_ir::{SharedArena, StringInterner};
use minic_parse::{parse_source, ParseMode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn eval(source: &str) -> EvalResult<Option<Value>> {
    let interner = StringInterner::new();
    let output = parse_source(source, &interner, ParseMode::Repl).expect("source should parse");
    let arena = SharedArena::new(output.arena);
    evaluate(
        &arena,
        &output.items,
        &interner,
        &Environment::new(),
        EvalConfig::default(),
    )
}

/// Integer literal source for `n`, negated through unary minus.
fn int_source(n: i32) -> String {
    if n < 0 {
        format!("(-{})", n.unsigned_abs())
    } else {
        n.to_string()
    }
}

proptest! {
    #[test]
    fn integer_division_truncates_toward_zero(
        a in -100_000i32..100_000,
        b in (-1_000i32..1_000).prop_filter("non-zero divisor", |b| *b != 0),
    ) {
        let source = format!("{} / {}", int_source(a), int_source(b));
        prop_assert_eq!(eval(&source), Ok(Some(Value::Integer(a / b))));
    }

    #[test]
    fn integer_division_by_zero_always_fails(a in -100_000i32..100_000) {
        let source = format!("{} / 0", int_source(a));
        let kind = eval(&source).map_err(|e| e.kind);
        prop_assert_eq!(kind, Err(EvalErrorKind::DivisionByZero));
    }

    #[test]
    fn assignment_truncates_reals_into_int(whole in 0i32..10_000, frac in 0u32..100) {
        let source = format!("int a = 0; a = {whole}.{frac:02}; a;");
        prop_assert_eq!(eval(&source), Ok(Some(Value::Integer(whole))));
    }

    #[test]
    fn shadowed_variable_is_restored(outer in 0i32..1_000, inner in 0i32..1_000) {
        let source = format!("int x = {outer}; {{ int x = {inner}; }} x;");
        prop_assert_eq!(eval(&source), Ok(Some(Value::Integer(outer))));
    }

    #[test]
    fn for_loop_counter_reaches_bound(bound in 0i32..200) {
        let source = format!("int i = 0; for (i = 0; i < {bound}; i = i + 1) {{}} i;");
        prop_assert_eq!(eval(&source), Ok(Some(Value::Integer(bound))));
    }
}

#[test]
fn factorial_of_five() {
    let source = "int fact(int n) { if (n <= 1) return 1; return n * fact(n - 1); } fact(5);";
    assert_eq!(eval(source), Ok(Some(Value::Integer(120))));
}

#[test]
fn logical_operands_are_both_evaluated() {
    let source = "int seen = 0; int mark() { seen = seen + 1; return 1; } 0 && mark(); 1 || mark(); seen;";
    assert_eq!(eval(source), Ok(Some(Value::Integer(2))));
}
