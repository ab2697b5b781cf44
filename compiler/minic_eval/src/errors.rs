//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured category; the factory functions
//! below are the way the interpreter builds errors. None of these are fatal
//! to the embedding session: an error aborts the current unit only.
//!
//! `return` is not an error. It travels as [`Flow::Return`](crate::Flow) and
//! can never be caught by code that handles `EvalError`.

use minic_ir::Span;

/// Result of evaluation.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalErrorKind {
    // Names
    #[error("Variable '{name}' is not defined.")]
    UndefinedVariable { name: String },
    #[error("Function '{name}' is not defined.")]
    UndefinedFunction { name: String },

    // Declared types
    #[error("Unknown type: {name}")]
    UnknownType { name: String },
    #[error("Cannot declare variable of type void")]
    VoidDeclaration,

    // Calls
    #[error("Function '{function}' expects {expected} arguments but got {got}")]
    ArityMismatch {
        function: String,
        expected: usize,
        got: usize,
    },
    #[error("maximum recursion depth of {limit} exceeded")]
    RecursionLimit { limit: usize },
    #[error("return outside of a function")]
    ReturnOutsideFunction,

    // Values
    #[error("type error: {message}")]
    TypeError { message: String },
    #[error("Division by zero.")]
    DivisionByZero,

    // Whole-program mode
    #[error("No zero-argument 'main' function defined.")]
    MissingMain,
}

/// An evaluation failure, optionally located in the source.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    #[cold]
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach a location unless one is already present.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn unknown_type(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownType {
        name: name.to_string(),
    })
}

#[cold]
pub fn void_declaration() -> EvalError {
    EvalError::from_kind(EvalErrorKind::VoidDeclaration)
}

#[cold]
pub fn arity_mismatch(function: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

#[cold]
pub fn return_outside_function() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReturnOutsideFunction)
}

#[cold]
pub fn type_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeError {
        message: message.into(),
    })
}

/// A call to a function that produced no value was used as a value.
#[cold]
pub fn void_value_used(function: &str) -> EvalError {
    type_error(format!("function '{function}' does not produce a value"))
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn missing_main() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingMain)
}
