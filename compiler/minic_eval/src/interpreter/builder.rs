//! `InterpreterBuilder` and evaluation settings.

use minic_ir::{SharedArena, StringInterner};

use super::{Interpreter, ScopeOwnership};
use crate::environment::Environment;

/// Tunable limits for an evaluation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum nesting of user function calls; `None` means unbounded.
    pub max_call_depth: Option<usize>,
}

impl EvalConfig {
    #[must_use]
    pub fn with_max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }
}

/// Builder for [`Interpreter`].
///
/// Without an explicit environment the interpreter starts from a fresh one.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a SharedArena,
    env: Option<Environment>,
    config: EvalConfig,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a SharedArena) -> Self {
        InterpreterBuilder {
            interner,
            arena,
            env: None,
            config: EvalConfig::default(),
        }
    }

    /// Evaluate against `env`. Scopes are shared with the caller's copy.
    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: self.env.unwrap_or_default(),
            call_depth: 0,
            config: self.config,
            scope_ownership: ScopeOwnership::Borrowed,
        }
    }
}
