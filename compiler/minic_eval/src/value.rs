//! Runtime values.
//!
//! Three numeric kinds and nothing else. Values are `Copy`; every operation
//! produces a fresh one.

use std::fmt;

/// Marker printed for a unit that produced no value.
pub const NO_VALUE: &str = "[No value]";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i32),
    Real(f64),
    /// A single byte.
    Character(u8),
}

/// Numeric kind of a [`Value`].
///
/// Ordered by generality, so the common kind of two operands is their `max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Character,
    Integer,
    Real,
}

impl Value {
    /// `1` for true, `0` for false.
    #[inline]
    pub fn from_bool(b: bool) -> Value {
        Value::Integer(i32::from(b))
    }

    #[inline]
    pub fn kind(self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Real(_) => ValueKind::Real,
            Value::Character(_) => ValueKind::Character,
        }
    }

    /// Non-zero is true. A character is compared against `'\0'`.
    #[inline]
    pub fn is_truthy(self) -> bool {
        match self {
            Value::Integer(n) => n != 0,
            Value::Real(r) => r != 0.0,
            Value::Character(c) => c != 0,
        }
    }

    /// Integer view: reals truncate toward zero, characters widen.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "real to int conversion truncates toward zero and saturates"
    )]
    pub fn to_integer(self) -> i32 {
        match self {
            Value::Integer(n) => n,
            Value::Real(r) => r as i32,
            Value::Character(c) => i32::from(c),
        }
    }

    #[inline]
    pub fn to_real(self) -> f64 {
        match self {
            Value::Integer(n) => f64::from(n),
            Value::Real(r) => r,
            Value::Character(c) => f64::from(c),
        }
    }

    /// Byte view: integers keep their low byte, reals truncate first.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "narrowing to a byte keeps the low eight bits"
    )]
    pub fn to_character(self) -> u8 {
        match self {
            Value::Integer(n) => n as u8,
            Value::Real(r) => (r as i32) as u8,
            Value::Character(c) => c,
        }
    }

    /// Convert to `kind` using the widening and narrowing rules above.
    #[must_use]
    pub fn promote(self, kind: ValueKind) -> Value {
        match kind {
            ValueKind::Integer => Value::Integer(self.to_integer()),
            ValueKind::Real => Value::Real(self.to_real()),
            ValueKind::Character => Value::Character(self.to_character()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Character(c) => write!(f, "{}", char::from(*c)),
        }
    }
}

/// Render the result of an evaluation unit for display.
pub fn format_output(output: Option<Value>) -> String {
    match output {
        Some(value) => value.to_string(),
        None => NO_VALUE.to_string(),
    }
}
