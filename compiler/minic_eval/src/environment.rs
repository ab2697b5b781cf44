//! Lexical scopes for variables and functions.
//!
//! Scopes are reference-counted and chained to their parent. The
//! [`Environment`] keeps the stack of scopes entered so far; pushing creates
//! a child of the current scope and popping detaches it again.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use minic_ir::Name;

use crate::function::Function;
use crate::types::VarType;
use crate::value::Value;

/// A declared variable: its type and current value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Variable {
    pub ty: VarType,
    pub value: Value,
}

/// Returned by [`Environment::assign`] when no scope declares the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignError;

/// Single-threaded shared scope handle (`Rc<RefCell<T>>`).
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &LocalScope<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One binding frame.
#[derive(Debug, Default)]
pub struct Scope {
    variables: FxHashMap<Name, Variable>,
    functions: FxHashMap<Name, Rc<Function>>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            parent: Some(parent),
            ..Scope::default()
        }
    }

    /// Create or overwrite a binding in this scope only.
    #[inline]
    pub fn define(&mut self, name: Name, variable: Variable) {
        self.variables.insert(name, variable);
    }

    pub fn lookup(&self, name: Name) -> Option<Variable> {
        if let Some(variable) = self.variables.get(&name) {
            return Some(*variable);
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    /// Overwrite the nearest existing binding of `name`.
    pub fn assign(&mut self, name: Name, variable: Variable) -> Result<(), AssignError> {
        if let Some(slot) = self.variables.get_mut(&name) {
            *slot = variable;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, variable),
            None => Err(AssignError),
        }
    }

    pub fn define_function(&mut self, name: Name, function: Rc<Function>) {
        self.functions.insert(name, function);
    }

    pub fn lookup_function(&self, name: Name) -> Option<Rc<Function>> {
        if let Some(function) = self.functions.get(&name) {
            return Some(Rc::clone(function));
        }
        self.parent.as_ref()?.borrow().lookup_function(name)
    }
}

/// The interpreter's view of the scope chain.
///
/// Cloning an environment shares its scopes: definitions made through the
/// clone are visible through the original. Scopes pushed on a clone stay on
/// that clone.
#[derive(Clone, Debug)]
pub struct Environment {
    /// Entered scopes, innermost last. Never empty.
    scopes: Vec<LocalScope<Scope>>,
    global: LocalScope<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            scopes: vec![global.clone()],
            global,
        }
    }

    /// Environment for a function call: one fresh scope whose parent is the
    /// scope that defined the function.
    pub fn for_call(&self, defining: LocalScope<Scope>) -> Environment {
        let call_scope = LocalScope::new(Scope::with_parent(defining.clone()));
        Environment {
            scopes: vec![defining, call_scope],
            global: self.global.clone(),
        }
    }

    /// Number of scopes on the stack, the global scope included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn push_scope(&mut self) {
        let parent = self.current_scope();
        self.scopes.push(LocalScope::new(Scope::with_parent(parent)));
    }

    /// Leave the innermost scope. The bottom scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    #[inline]
    pub fn current_scope(&self) -> LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global).clone()
    }

    pub fn global_scope(&self) -> LocalScope<Scope> {
        self.global.clone()
    }

    #[inline]
    fn innermost(&self) -> &LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global)
    }

    /// Bind `name` in the current scope, shadowing any outer binding.
    pub fn define(&mut self, name: Name, ty: VarType, value: Value) {
        self.innermost()
            .borrow_mut()
            .define(name, Variable { ty, value });
    }

    /// Update the nearest scope that already binds `name`.
    pub fn assign(&mut self, name: Name, ty: VarType, value: Value) -> Result<(), AssignError> {
        self.innermost()
            .borrow_mut()
            .assign(name, Variable { ty, value })
    }

    pub fn get(&self, name: Name) -> Option<Variable> {
        self.innermost().borrow().lookup(name)
    }

    pub fn exists(&self, name: Name) -> bool {
        self.get(name).is_some()
    }

    pub fn define_function(&mut self, name: Name, function: Function) {
        self.innermost()
            .borrow_mut()
            .define_function(name, Rc::new(function));
    }

    /// Look up a function through the scope chain. Absence is not an error
    /// here; callers decide.
    pub fn get_function(&self, name: Name) -> Option<Rc<Function>> {
        self.innermost().borrow().lookup_function(name)
    }

    pub fn function_exists(&self, name: Name) -> bool {
        self.get_function(name).is_some()
    }

    /// Look up a function together with the scope that defines it.
    pub fn resolve_function(&self, name: Name) -> Option<(Rc<Function>, LocalScope<Scope>)> {
        let mut scope = self.current_scope();
        loop {
            let parent = {
                let frame = scope.borrow();
                if let Some(function) = frame.functions.get(&name) {
                    return Some((Rc::clone(function), scope.clone()));
                }
                frame.parent.clone()
            };
            scope = parent?;
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
