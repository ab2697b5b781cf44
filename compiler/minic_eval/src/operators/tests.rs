use super::*;
use crate::errors::EvalErrorKind;
use crate::unary_operators::evaluate_unary;
use minic_ir::UnaryOp;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn eval(left: Value, right: Value, op: BinaryOp) -> Value {
    match evaluate_binary(left, right, op) {
        Ok(value) => value,
        Err(err) => panic!("{left:?} {op} {right:?} failed: {err}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_eq!(eval(Value::Integer(3), Value::Integer(4), BinaryOp::Add), Value::Integer(7));
    assert_eq!(eval(Value::Integer(3), Value::Integer(4), BinaryOp::Sub), Value::Integer(-1));
    assert_eq!(eval(Value::Integer(3), Value::Integer(4), BinaryOp::Mul), Value::Integer(12));
    assert_eq!(eval(Value::Integer(5), Value::Integer(2), BinaryOp::Div), Value::Integer(2));
    assert_eq!(eval(Value::Integer(-7), Value::Integer(2), BinaryOp::Div), Value::Integer(-3));
}

#[test]
fn mixed_arithmetic_promotes() {
    assert_eq!(eval(Value::Integer(5), Value::Real(2.0), BinaryOp::Div), Value::Real(2.5));
    assert_eq!(eval(Value::Real(3.5), Value::Real(2.5), BinaryOp::Add), Value::Real(6.0));
    assert_eq!(
        eval(Value::Integer(10), Value::Character(b'A'), BinaryOp::Add),
        Value::Integer(75)
    );
    assert_eq!(
        eval(Value::Character(b'a'), Value::Real(0.5), BinaryOp::Add),
        Value::Real(97.5)
    );
}

#[test]
fn character_arithmetic_stays_character() {
    assert_eq!(
        eval(Value::Character(b'a'), Value::Character(1), BinaryOp::Add),
        Value::Character(b'b')
    );
}

#[test]
fn division_by_zero_for_every_kind() {
    for zero in [Value::Integer(0), Value::Real(0.0), Value::Real(-0.0), Value::Character(0)] {
        let err = evaluate_binary(Value::Integer(5), zero, BinaryOp::Div).map(|_| ());
        assert_eq!(err.map_err(|e| e.kind), Err(EvalErrorKind::DivisionByZero));
    }
    let err = evaluate_binary(Value::Real(1.5), Value::Integer(0), BinaryOp::Div).map(|_| ());
    assert_eq!(err.map_err(|e| e.kind), Err(EvalErrorKind::DivisionByZero));
}

#[test]
fn overflow_wraps() {
    assert_eq!(
        eval(Value::Integer(i32::MAX), Value::Integer(1), BinaryOp::Add),
        Value::Integer(i32::MIN)
    );
    assert_eq!(
        eval(Value::Integer(i32::MIN), Value::Integer(-1), BinaryOp::Div),
        Value::Integer(i32::MIN)
    );
}

#[test]
fn comparisons_yield_integers() {
    assert_eq!(eval(Value::Integer(3), Value::Integer(5), BinaryOp::Lt), Value::Integer(1));
    assert_eq!(eval(Value::Integer(3), Value::Integer(5), BinaryOp::Gt), Value::Integer(0));
    assert_eq!(eval(Value::Integer(5), Value::Integer(5), BinaryOp::LtEq), Value::Integer(1));
    assert_eq!(eval(Value::Integer(4), Value::Integer(5), BinaryOp::GtEq), Value::Integer(0));
    assert_eq!(eval(Value::Integer(4), Value::Real(4.0), BinaryOp::Eq), Value::Integer(1));
    assert_eq!(
        eval(Value::Character(b'A'), Value::Integer(65), BinaryOp::NotEq),
        Value::Integer(0)
    );
}

#[test]
fn nan_is_unordered() {
    let nan = Value::Real(f64::NAN);
    assert_eq!(eval(nan, nan, BinaryOp::Eq), Value::Integer(0));
    assert_eq!(eval(nan, nan, BinaryOp::NotEq), Value::Integer(1));
    assert_eq!(eval(nan, Value::Integer(1), BinaryOp::Lt), Value::Integer(0));
}

#[test]
fn logical_operators() {
    assert_eq!(eval(Value::Integer(1), Value::Integer(0), BinaryOp::And), Value::Integer(0));
    assert_eq!(eval(Value::Integer(2), Value::Real(0.5), BinaryOp::And), Value::Integer(1));
    assert_eq!(eval(Value::Integer(0), Value::Character(b'x'), BinaryOp::Or), Value::Integer(1));
    assert_eq!(eval(Value::Integer(0), Value::Real(0.0), BinaryOp::Or), Value::Integer(0));
}

#[test]
fn unary_operators() {
    assert_eq!(evaluate_unary(Value::Integer(5), UnaryOp::Neg), Value::Integer(-5));
    assert_eq!(evaluate_unary(Value::Real(2.5), UnaryOp::Neg), Value::Real(-2.5));
    assert_eq!(evaluate_unary(Value::Character(1), UnaryOp::Neg), Value::Character(255));
    assert_eq!(evaluate_unary(Value::Integer(0), UnaryOp::Not), Value::Integer(1));
    assert_eq!(evaluate_unary(Value::Real(0.5), UnaryOp::Not), Value::Integer(0));
    assert_eq!(evaluate_unary(Value::Character(0), UnaryOp::Not), Value::Integer(1));
}

proptest! {
    #[test]
    fn integer_division_truncates_toward_zero(a in -100_000i32..100_000, b in -1000i32..1000) {
        prop_assume!(b != 0);
        let Value::Integer(q) = eval(Value::Integer(a), Value::Integer(b), BinaryOp::Div) else {
            unreachable!("int / int is an int");
        };
        let exact = f64::from(a) / f64::from(b);
        prop_assert_eq!(f64::from(q), exact.trunc());
    }

    #[test]
    fn dividing_by_zero_always_fails(a in any::<i32>()) {
        let result = evaluate_binary(Value::Integer(a), Value::Integer(0), BinaryOp::Div);
        prop_assert_eq!(result.map_err(|e| e.kind), Err(EvalErrorKind::DivisionByZero));
    }

    #[test]
    fn comparison_results_are_zero_or_one(a in any::<i32>(), b in any::<i32>()) {
        for op in [BinaryOp::Lt, BinaryOp::Gt, BinaryOp::LtEq, BinaryOp::GtEq, BinaryOp::Eq, BinaryOp::NotEq] {
            let Value::Integer(n) = eval(Value::Integer(a), Value::Integer(b), op) else {
                unreachable!("comparisons yield ints");
            };
            prop_assert!(n == 0 || n == 1);
        }
    }
}
