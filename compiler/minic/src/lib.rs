//! MiniC driver.
//!
//! Ties the front end and the evaluator together:
//!
//! ```text
//! source ──► lex ──► parse ──► ParseOutput ──► evaluate / run_program
//!                                                   │
//!                      Session (persistent env) ◄───┘
//! ```
//!
//! [`Repl`] drives a [`Session`] line by line; the [`commands`] module holds
//! the CLI handlers.

pub mod commands;
pub mod diagnostic;
pub mod repl;
pub mod session;
mod tracing_setup;

pub use diagnostic::{render_error, ColorMode};
pub use repl::Repl;
pub use session::{run_source, Session, SessionError};
pub use tracing_setup::{init_tracing, LOG_ENV};
