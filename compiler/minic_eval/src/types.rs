//! Declared types and the coercion table.
//!
//! | source    | → int          | → float/double | → char                  |
//! |-----------|----------------|----------------|-------------------------|
//! | int       | identity       | widen          | keep low byte           |
//! | real      | trunc to zero  | identity       | trunc, then low byte    |
//! | char      | widen          | widen          | identity                |
//!
//! The same table serves assignment, initialization, argument binding and
//! return values.

use std::fmt;

use minic_ir::{StringInterner, TypeSpec};

use crate::errors::{unknown_type, void_declaration, EvalResult};
use crate::value::{Value, ValueKind};

/// Type of a variable or parameter. `void` is not among them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VarType {
    Integer,
    Float,
    Double,
    Character,
}

impl VarType {
    /// Resolve a written type specifier for a variable or parameter.
    pub fn resolve(spec: TypeSpec, interner: &StringInterner) -> EvalResult<VarType> {
        match spec {
            TypeSpec::Int => Ok(VarType::Integer),
            TypeSpec::Float => Ok(VarType::Float),
            TypeSpec::Double => Ok(VarType::Double),
            TypeSpec::Char => Ok(VarType::Character),
            TypeSpec::Void => Err(void_declaration()),
            TypeSpec::Other(name) => Err(unknown_type(interner.lookup(name))),
        }
    }

    /// Representation used for values of this type. `float` and `double`
    /// share one.
    #[inline]
    pub fn value_kind(self) -> ValueKind {
        match self {
            VarType::Integer => ValueKind::Integer,
            VarType::Float | VarType::Double => ValueKind::Real,
            VarType::Character => ValueKind::Character,
        }
    }

    /// Value of an uninitialized declaration.
    pub fn zero_value(self) -> Value {
        match self.value_kind() {
            ValueKind::Integer => Value::Integer(0),
            ValueKind::Real => Value::Real(0.0),
            ValueKind::Character => Value::Character(0),
        }
    }

    /// Convert `value` for storage in a slot of this type.
    #[inline]
    pub fn coerce(self, value: Value) -> Value {
        value.promote(self.value_kind())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VarType::Integer => "int",
            VarType::Float => "float",
            VarType::Double => "double",
            VarType::Character => "char",
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared result of a function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReturnType {
    Void,
    Value(VarType),
}

impl ReturnType {
    pub fn resolve(spec: TypeSpec, interner: &StringInterner) -> EvalResult<ReturnType> {
        match spec {
            TypeSpec::Void => Ok(ReturnType::Void),
            other => VarType::resolve(other, interner).map(ReturnType::Value),
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Void => f.write_str("void"),
            ReturnType::Value(ty) => ty.fmt(f),
        }
    }
}
