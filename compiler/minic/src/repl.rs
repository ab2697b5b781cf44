//! Line-oriented read-eval-print loop.

use std::io::{self, BufRead, Write};

use minic_eval::format_output;
use tracing::debug;

use crate::session::Session;

pub const BANNER: &str = "Enter an expression (or 'exit' to quit):";
pub const PROMPT: &str = "> ";
pub const CONTINUATION_PROMPT: &str = "... ";

pub struct Repl {
    session: Session,
}

impl Repl {
    pub fn new(session: Session) -> Self {
        Repl { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read units from `input` until `exit` or end of input, writing each
    /// result to `output`.
    ///
    /// Lines are joined into one unit while braces are unbalanced. Errors
    /// are printed and the session carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{BANNER}")?;
        let mut pending = String::new();
        let mut line = String::new();
        loop {
            let prompt = if pending.is_empty() {
                PROMPT
            } else {
                CONTINUATION_PROMPT
            };
            write!(output, "{prompt}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim();
            if pending.is_empty() {
                if trimmed == "exit" {
                    return Ok(());
                }
                if trimmed.is_empty() {
                    continue;
                }
            }

            pending.push_str(line.trim_end());
            pending.push('\n');
            if brace_depth(&pending) > 0 {
                continue;
            }
            let unit = std::mem::take(&mut pending);
            self.eval_unit(&unit, &mut output)?;
        }

        // Input ended in the middle of a unit.
        if !pending.is_empty() {
            writeln!(output)?;
            self.eval_unit(&pending, &mut output)?;
        }
        Ok(())
    }

    fn eval_unit<W: Write>(&mut self, unit: &str, output: &mut W) -> io::Result<()> {
        debug!(len = unit.len(), "evaluating unit");
        match self.session.eval_source(unit) {
            Ok(value) => writeln!(output, "Result: {}", format_output(value))?,
            Err(err) => writeln!(output, "Error: {err}")?,
        }
        writeln!(output)
    }
}

/// Net count of open braces, ignoring those inside character literals and
/// comments.
pub fn brace_depth(source: &str) -> i32 {
    let mut depth = 0;
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            '\'' => {
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => {
                            chars.next();
                        }
                        '\'' | '\n' => break,
                        _ => {}
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut star = false;
                for c in chars.by_ref() {
                    if star && c == '/' {
                        break;
                    }
                    star = c == '*';
                }
            }
            _ => {}
        }
    }
    depth
}
