//! Function registration and the call protocol.

use std::rc::Rc;

use minic_ir::{ExprRange, FunctionDef, Name, Span};
use tracing::debug;

use super::{Flow, Interpreter};
use crate::environment::{LocalScope, Scope};
use crate::errors::{arity_mismatch, type_error, undefined_function, EvalResult};
use crate::function::{Function, Parameter};
use crate::types::{ReturnType, VarType};
use crate::value::Value;

impl Interpreter<'_> {
    /// Resolve a definition's types and bind it in the current scope.
    pub(crate) fn register_function(&mut self, def: &FunctionDef) -> EvalResult<()> {
        let return_type = ReturnType::resolve(def.return_type, self.interner)?;
        let params = self
            .arena
            .get_params(def.params)
            .iter()
            .map(|param| {
                VarType::resolve(param.ty, self.interner)
                    .map(|ty| Parameter {
                        name: param.name,
                        ty,
                    })
                    .map_err(|e| e.with_span(param.span))
            })
            .collect::<EvalResult<Vec<_>>>()?;

        debug!(
            name = self.interner.lookup(def.name),
            arity = params.len(),
            %return_type,
            "registering function"
        );
        self.env.define_function(
            def.name,
            Function {
                name: def.name,
                return_type,
                params,
                body: def.body,
                arena: self.arena.clone(),
                span: def.span,
            },
        );
        Ok(())
    }

    /// Evaluate `callee(args...)`. `None` means the callee produced no value.
    pub(crate) fn eval_call(
        &mut self,
        callee: Name,
        args: ExprRange,
        span: Span,
    ) -> EvalResult<Option<Value>> {
        let Some((function, defining)) = self.env.resolve_function(callee) else {
            return Err(undefined_function(self.interner.lookup(callee)).with_span(span));
        };

        let arena = self.arena;
        let values = arena
            .get_expr_list(args)
            .iter()
            .map(|&arg| self.eval_expr(arg))
            .collect::<EvalResult<Vec<_>>>()?;

        if values.len() != function.arity() {
            return Err(arity_mismatch(
                self.interner.lookup(callee),
                function.arity(),
                values.len(),
            )
            .with_span(span));
        }

        self.invoke(&function, defining, &values)
            .map_err(|e| e.with_span(span))
    }

    /// Run `function` with already-evaluated, arity-checked arguments.
    #[tracing::instrument(level = "debug", skip_all, fields(function = self.interner.lookup(function.name)))]
    pub(crate) fn invoke(
        &mut self,
        function: &Rc<Function>,
        defining: LocalScope<Scope>,
        values: &[Value],
    ) -> EvalResult<Option<Value>> {
        self.check_recursion_limit()?;

        let call_env = self.env.for_call(defining);
        let flow = {
            let mut call = self.create_function_interpreter(&function.arena, call_env);
            for (param, &value) in function.params.iter().zip(values) {
                call.env.define(param.name, param.ty, param.ty.coerce(value));
            }
            call.exec_sequence(function.body)?
        };

        let result = match flow {
            Flow::Return(value) => Some(value),
            Flow::Normal(value) => value,
        };
        match (function.return_type, result) {
            (ReturnType::Void, _) => Ok(None),
            (ReturnType::Value(ty), Some(value)) => Ok(Some(ty.coerce(value))),
            (ReturnType::Value(ty), None) => Err(type_error(format!(
                "function '{}' declared to return {ty} produced no value",
                self.interner.lookup(function.name)
            ))),
        }
    }
}
