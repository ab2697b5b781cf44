//! Unary operator implementations.

use minic_ir::UnaryOp;

use crate::value::Value;

/// Evaluate `op value`. Negation keeps the operand's kind; `!` yields 0 or 1.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> Value {
    match (value, op) {
        (Value::Integer(n), UnaryOp::Neg) => Value::Integer(n.wrapping_neg()),
        (Value::Real(r), UnaryOp::Neg) => Value::Real(-r),
        (Value::Character(c), UnaryOp::Neg) => Value::Character(c.wrapping_neg()),
        (_, UnaryOp::Not) => Value::from_bool(!value.is_truthy()),
    }
}
