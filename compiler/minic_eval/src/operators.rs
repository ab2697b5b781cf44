//! Binary operator implementations.
//!
//! Both operands are always evaluated before they reach this module; `&&`
//! and `||` combine two finished values and never skip one.
//!
//! Arithmetic and comparison first promote both operands to their common
//! kind (`char < int < double`). Arithmetic returns that kind; comparison
//! and logic return an `int` 0 or 1. Integer and character arithmetic wraps.

use minic_ir::BinaryOp;

use crate::errors::{division_by_zero, EvalResult};
use crate::value::{Value, ValueKind};

/// Operand pair after promotion to the common kind.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Promoted {
    Characters(u8, u8),
    Integers(i32, i32),
    Reals(f64, f64),
}

fn promote_pair(left: Value, right: Value) -> Promoted {
    match left.kind().max(right.kind()) {
        ValueKind::Character => Promoted::Characters(left.to_character(), right.to_character()),
        ValueKind::Integer => Promoted::Integers(left.to_integer(), right.to_integer()),
        ValueKind::Real => Promoted::Reals(left.to_real(), right.to_real()),
    }
}

/// Evaluate `left op right`.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::from_bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Or => Ok(Value::from_bool(left.is_truthy() || right.is_truthy())),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            eval_arithmetic(left, right, op)
        }
        BinaryOp::Lt
        | BinaryOp::Gt
        | BinaryOp::LtEq
        | BinaryOp::GtEq
        | BinaryOp::Eq
        | BinaryOp::NotEq => Ok(eval_comparison(left, right, op)),
    }
}

fn eval_arithmetic(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    // Zero divisors are rejected for every kind, reals included.
    if op == BinaryOp::Div && !right.is_truthy() {
        return Err(division_by_zero());
    }
    let value = match promote_pair(left, right) {
        Promoted::Integers(a, b) => Value::Integer(match op {
            BinaryOp::Add => a.wrapping_add(b),
            BinaryOp::Sub => a.wrapping_sub(b),
            BinaryOp::Mul => a.wrapping_mul(b),
            _ => a.wrapping_div(b),
        }),
        Promoted::Characters(a, b) => Value::Character(match op {
            BinaryOp::Add => a.wrapping_add(b),
            BinaryOp::Sub => a.wrapping_sub(b),
            BinaryOp::Mul => a.wrapping_mul(b),
            _ => a / b,
        }),
        Promoted::Reals(a, b) => Value::Real(match op {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            _ => a / b,
        }),
    };
    Ok(value)
}

fn eval_comparison(left: Value, right: Value, op: BinaryOp) -> Value {
    let ordering = match promote_pair(left, right) {
        Promoted::Characters(a, b) => a.partial_cmp(&b),
        Promoted::Integers(a, b) => a.partial_cmp(&b),
        Promoted::Reals(a, b) => a.partial_cmp(&b),
    };
    // NaN compares unordered: only `!=` holds.
    let result = match ordering {
        Some(ordering) => match op {
            BinaryOp::Lt => ordering.is_lt(),
            BinaryOp::Gt => ordering.is_gt(),
            BinaryOp::LtEq => ordering.is_le(),
            BinaryOp::GtEq => ordering.is_ge(),
            BinaryOp::Eq => ordering.is_eq(),
            _ => ordering.is_ne(),
        },
        None => op == BinaryOp::NotEq,
    };
    Value::from_bool(result)
}

#[cfg(test)]
mod tests;
