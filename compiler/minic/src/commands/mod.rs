//! Command handlers for the `minic` CLI.
//!
//! Each handler returns the process exit code; `main` decides when to exit.
//! The `*_with` variants take explicit writers so tests can capture output.

mod eval;
mod repl;
mod run;

pub use eval::{eval_expr, eval_expr_with};
pub use repl::start_repl;
pub use run::{run_file, run_file_with};

/// Read a source file, turning I/O failures into a user-facing message.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
