//! A persistent evaluation session.
//!
//! One interner and one global environment live for the whole session, so a
//! function or variable defined by one unit is visible to the next. Each
//! unit gets its own arena; functions keep theirs alive through
//! [`SharedArena`].

use minic_eval::{evaluate, run_program, EvalConfig, EvalError, Environment, Value};
use minic_ir::{SharedArena, SharedInterner, Span, SyntaxError};
use minic_parse::{parse_source, ParseMode};

/// Failure of one evaluation unit.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl SessionError {
    /// Source location of the failure, when one is known.
    pub fn span(&self) -> Option<Span> {
        match self {
            SessionError::Syntax(err) => Some(err.span),
            SessionError::Eval(err) => err.span,
        }
    }
}

pub struct Session {
    interner: SharedInterner,
    env: Environment,
    config: EvalConfig,
}

impl Session {
    pub fn new() -> Self {
        Session {
            interner: SharedInterner::default(),
            env: Environment::new(),
            config: EvalConfig::default(),
        }
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.config = self.config.with_max_call_depth(depth);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Parse `source` with the REPL grammar and evaluate it in this session.
    ///
    /// A failed unit leaves whatever it defined before failing in place.
    pub fn eval_source(&mut self, source: &str) -> Result<Option<Value>, SessionError> {
        let output = parse_source(source, &self.interner, ParseMode::Repl)?;
        let arena = SharedArena::new(output.arena);
        let value = evaluate(&arena, &output.items, &self.interner, &self.env, self.config)?;
        Ok(value)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `source` as a translation unit and run its `main` in a fresh
/// environment.
pub fn run_source(source: &str, config: EvalConfig) -> Result<Option<Value>, SessionError> {
    let interner = SharedInterner::default();
    let output = parse_source(source, &interner, ParseMode::TranslationUnit)?;
    let arena = SharedArena::new(output.arena);
    let value = run_program(&arena, &output.items, &interner, config)?;
    Ok(value)
}
