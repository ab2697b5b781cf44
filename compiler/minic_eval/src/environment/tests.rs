use super::*;
use minic_ir::{ExprArena, SharedArena, Span, StmtRange, StringInterner};
use pretty_assertions::assert_eq;

use crate::types::ReturnType;

fn function(name: Name) -> Function {
    Function {
        name,
        return_type: ReturnType::Value(VarType::Integer),
        params: Vec::new(),
        body: StmtRange::EMPTY,
        arena: SharedArena::new(ExprArena::new()),
        span: Span::DUMMY,
    }
}

#[test]
fn define_and_get() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut env = Environment::new();
    env.define(x, VarType::Integer, Value::Integer(42));
    assert!(env.exists(x));
    assert_eq!(
        env.get(x),
        Some(Variable {
            ty: VarType::Integer,
            value: Value::Integer(42)
        })
    );
    assert_eq!(env.get(interner.intern("y")), None);
}

#[test]
fn inner_scope_shadows_and_restores() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut env = Environment::new();
    env.define(x, VarType::Integer, Value::Integer(1));

    env.push_scope();
    env.define(x, VarType::Character, Value::Character(b'c'));
    assert_eq!(env.get(x).map(|v| v.value), Some(Value::Character(b'c')));
    env.pop_scope();

    assert_eq!(env.get(x).map(|v| v.value), Some(Value::Integer(1)));
}

#[test]
fn assign_updates_nearest_binding() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut env = Environment::new();
    env.define(x, VarType::Integer, Value::Integer(1));

    env.push_scope();
    assert_eq!(env.assign(x, VarType::Integer, Value::Integer(5)), Ok(()));
    // No new binding was created in the inner scope.
    env.pop_scope();
    assert_eq!(env.get(x).map(|v| v.value), Some(Value::Integer(5)));
}

#[test]
fn assign_to_undeclared_fails() {
    let interner = StringInterner::new();
    let mut env = Environment::new();
    assert_eq!(
        env.assign(interner.intern("nope"), VarType::Integer, Value::Integer(1)),
        Err(AssignError)
    );
}

#[test]
fn inner_definitions_vanish_on_pop() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let mut env = Environment::new();
    env.push_scope();
    env.define(a, VarType::Integer, Value::Integer(5));
    assert_eq!(env.depth(), 2);
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    assert!(!env.exists(a));
}

#[test]
fn global_scope_is_never_popped() {
    let interner = StringInterner::new();
    let g = interner.intern("g");
    let mut env = Environment::new();
    env.define(g, VarType::Double, Value::Real(1.5));
    env.pop_scope();
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    assert!(env.exists(g));
}

#[test]
fn functions_resolve_through_parents() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let mut env = Environment::new();
    assert!(!env.function_exists(f));
    env.define_function(f, function(f));

    env.push_scope();
    env.push_scope();
    assert!(env.function_exists(f));
    let Some((found, defining)) = env.resolve_function(f) else {
        panic!("function should resolve");
    };
    assert_eq!(found.name, f);
    assert!(defining.ptr_eq(&env.global_scope()));
    assert!(env.get_function(interner.intern("g")).is_none());
}

#[test]
fn clones_share_scopes() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let env = Environment::new();
    let mut clone = env.clone();
    clone.define(x, VarType::Integer, Value::Integer(3));
    assert!(env.exists(x));

    clone.push_scope();
    assert_eq!(clone.depth(), 2);
    assert_eq!(env.depth(), 1);
}

#[test]
fn call_environment_sees_defining_scope_only() {
    let interner = StringInterner::new();
    let (g, local) = (interner.intern("g"), interner.intern("local"));
    let mut env = Environment::new();
    env.define(g, VarType::Integer, Value::Integer(1));
    env.push_scope();
    env.define(local, VarType::Integer, Value::Integer(2));

    let mut call = env.for_call(env.global_scope());
    assert_eq!(call.depth(), 2);
    assert!(call.exists(g));
    assert!(!call.exists(local));

    call.define(local, VarType::Integer, Value::Integer(9));
    assert_eq!(env.get(local).map(|v| v.value), Some(Value::Integer(2)));
}
