//! Tree-walking interpreter.
//!
//! Statements return a [`Flow`]; expressions return a [`Value`]. `return`
//! is carried as `Flow::Return` through every statement until the function
//! call that owns it absorbs it, so it never mixes with `EvalError`.
//!
//! Each function call runs in its own child `Interpreter` over the callee's
//! arena and a call environment rooted at the defining scope.

mod builder;
mod expr;
mod function_call;
mod scope_guard;
mod stmt;

pub use builder::{EvalConfig, InterpreterBuilder};
pub use scope_guard::ScopedInterpreter;

use minic_ir::{Item, SharedArena, StringInterner};

use crate::environment::Environment;
use crate::errors::{recursion_limit_exceeded, EvalError, EvalResult};
use crate::value::Value;

/// Outcome of executing a statement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Flow {
    /// Completed; carries the statement's value, if it produced one.
    Normal(Option<Value>),
    /// A `return` is unwinding toward its function call.
    Return(Value),
}

pub type ExecResult = Result<Flow, EvalError>;

/// Whether this interpreter pushed a scope it must pop on drop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ScopeOwnership {
    Borrowed,
    Owned,
}

pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    /// Arena the current code was parsed into.
    pub(crate) arena: &'a SharedArena,
    pub(crate) env: Environment,
    /// Active user function calls below this interpreter.
    pub(crate) call_depth: usize,
    pub(crate) config: EvalConfig,
    pub(crate) scope_ownership: ScopeOwnership,
}

impl Drop for Interpreter<'_> {
    fn drop(&mut self) {
        if self.scope_ownership == ScopeOwnership::Owned {
            self.env.pop_scope();
        }
    }
}

impl<'a> Interpreter<'a> {
    pub fn builder(interner: &'a StringInterner, arena: &'a SharedArena) -> InterpreterBuilder<'a> {
        InterpreterBuilder::new(interner, arena)
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Execute top-level items in order, folding their values.
    ///
    /// Function definitions are registered as they are reached.
    pub fn exec_items(&mut self, items: &[Item]) -> ExecResult {
        let mut last = None;
        for item in items {
            let flow = match *item {
                Item::Function(def) => {
                    self.register_function(&def)?;
                    Flow::Normal(None)
                }
                Item::Stmt(stmt) => self.exec_stmt(stmt)?,
            };
            match flow {
                Flow::Normal(Some(value)) => last = Some(value),
                Flow::Normal(None) => {}
                Flow::Return(_) => return Ok(flow),
            }
        }
        Ok(Flow::Normal(last))
    }

    pub(crate) fn check_recursion_limit(&self) -> Result<(), EvalError> {
        if let Some(limit) = self.config.max_call_depth {
            if self.call_depth >= limit {
                return Err(recursion_limit_exceeded(limit));
            }
        }
        Ok(())
    }

    /// Child interpreter for one call, evaluating over `arena` in `call_env`.
    ///
    /// The child owns the call scope and pops it when dropped.
    pub(crate) fn create_function_interpreter<'b>(
        &self,
        arena: &'b SharedArena,
        call_env: Environment,
    ) -> Interpreter<'b>
    where
        'a: 'b,
    {
        Interpreter {
            interner: self.interner,
            arena,
            env: call_env,
            call_depth: self.call_depth + 1,
            config: self.config,
            scope_ownership: ScopeOwnership::Owned,
        }
    }
}

/// Value of a finished unit. A `return` that reached top level is an error.
pub(crate) fn finish_unit(flow: Flow) -> EvalResult<Option<Value>> {
    match flow {
        Flow::Normal(value) => Ok(value),
        Flow::Return(_) => Err(crate::errors::return_outside_function()),
    }
}
