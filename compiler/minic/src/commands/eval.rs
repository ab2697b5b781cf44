//! The `eval` command: evaluate one unit given on the command line.

use std::io::{self, Write};

use minic_eval::{format_output, EvalConfig};

use crate::session::Session;

pub fn eval_expr(code: &str, config: EvalConfig) -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();
    eval_expr_with(code, config, &mut stdout.lock(), &mut stderr.lock()).unwrap_or(1)
}

pub fn eval_expr_with<O: Write, E: Write>(
    code: &str,
    config: EvalConfig,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    let mut session = Session::new().with_config(config);
    match session.eval_source(code) {
        Ok(value) => {
            writeln!(out, "Result: {}", format_output(value))?;
            Ok(0)
        }
        Err(error) => {
            writeln!(err, "Error: {error}")?;
            Ok(1)
        }
    }
}
