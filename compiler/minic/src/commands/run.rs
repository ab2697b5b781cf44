//! The `run` command: execute a whole program through its `main`.

use std::io::{self, Write};

use minic_eval::{format_output, EvalConfig};

use super::read_file;
use crate::diagnostic::{render_error, ColorMode};
use crate::session::run_source;

/// Run the program in `path`, printing its result to stdout and any
/// diagnostic to stderr.
pub fn run_file(path: &str, config: EvalConfig) -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_file_with(path, config, ColorMode::Auto, &mut stdout.lock(), &mut stderr.lock())
        .unwrap_or(1)
}

pub fn run_file_with<O: Write, E: Write>(
    path: &str,
    config: EvalConfig,
    color: ColorMode,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(message) => {
            writeln!(err, "{message}")?;
            return Ok(1);
        }
    };

    match run_source(&source, config) {
        Ok(value) => {
            writeln!(out, "Result: {}", format_output(value))?;
            Ok(0)
        }
        Err(error) => {
            tracing::debug!(%error, "program failed");
            write!(err, "{}", render_error(path, &source, &error, color))?;
            Ok(1)
        }
    }
}
