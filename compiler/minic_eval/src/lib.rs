//! Tree-walking evaluator for MiniC.
//!
//! The evaluator consumes the arena-allocated AST from `minic_ir`:
//!
//! - [`Value`] and the numeric promotion rules ([`evaluate_binary`])
//! - [`VarType`] and the conversion table applied on assignment, argument
//!   binding and return
//! - [`Environment`], a chain of reference-counted scopes
//! - [`Interpreter`], which runs statements and expressions
//! - [`evaluate`] and [`run_program`], the two entry points
//!
//! A function body is never re-parsed. [`Function`] keeps the
//! [`SharedArena`](minic_ir::SharedArena) it was parsed into, and every call
//! evaluates the same statement range.

mod environment;
mod errors;
mod function;
mod interpreter;
mod operators;
mod program;
mod types;
mod unary_operators;
mod value;

pub use environment::{AssignError, Environment, LocalScope, Scope, Variable};
pub use errors::{
    arity_mismatch, division_by_zero, missing_main, recursion_limit_exceeded,
    return_outside_function, type_error, undefined_function, undefined_variable, unknown_type,
    void_declaration, void_value_used, EvalError, EvalErrorKind, EvalResult,
};
pub use function::{Function, Parameter};
pub use interpreter::{EvalConfig, ExecResult, Flow, Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::evaluate_binary;
pub use program::{evaluate, run_program};
pub use types::{ReturnType, VarType};
pub use unary_operators::evaluate_unary;
pub use value::{format_output, Value, ValueKind, NO_VALUE};
