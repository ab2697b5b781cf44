//! The `repl` command.

use std::io;

use minic_eval::EvalConfig;

use crate::repl::Repl;
use crate::session::Session;

/// Run an interactive session on stdin/stdout.
pub fn start_repl(config: EvalConfig) -> i32 {
    let mut repl = Repl::new(Session::new().with_config(config));
    let stdin = io::stdin();
    match repl.run(stdin.lock(), io::stdout().lock()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}
