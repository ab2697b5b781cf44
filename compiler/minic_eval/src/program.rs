//! Evaluation entry points.

use minic_ir::{Item, SharedArena, StringInterner};

use crate::environment::Environment;
use crate::errors::{missing_main, EvalResult};
use crate::interpreter::{finish_unit, EvalConfig, Interpreter};
use crate::value::Value;

/// Evaluate one unit (a REPL line or any statement sequence) against `env`.
///
/// Definitions made by the unit persist in `env`. Scopes pushed during
/// evaluation are popped again even when the unit fails.
#[tracing::instrument(level = "debug", skip_all, fields(items = items.len()))]
pub fn evaluate(
    arena: &SharedArena,
    items: &[Item],
    interner: &StringInterner,
    env: &Environment,
    config: EvalConfig,
) -> EvalResult<Option<Value>> {
    let mut interpreter = Interpreter::builder(interner, arena)
        .environment(env.clone())
        .config(config)
        .build();
    let flow = interpreter.exec_items(items)?;
    finish_unit(flow)
}

/// Run a whole program: register its items in a fresh environment, then
/// call `main()` and return its converted result.
#[tracing::instrument(level = "debug", skip_all, fields(items = items.len()))]
pub fn run_program(
    arena: &SharedArena,
    items: &[Item],
    interner: &StringInterner,
    config: EvalConfig,
) -> EvalResult<Option<Value>> {
    let mut interpreter = Interpreter::builder(interner, arena).config(config).build();
    finish_unit(interpreter.exec_items(items)?)?;

    let main = interner.intern("main");
    let (function, defining) = match interpreter.env().resolve_function(main) {
        Some((function, defining)) if function.arity() == 0 => (function, defining),
        _ => return Err(missing_main()),
    };
    interpreter.invoke(&function, defining, &[])
}
