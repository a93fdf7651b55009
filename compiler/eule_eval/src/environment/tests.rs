use pretty_assertions::assert_eq;

use super::*;

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn test_define_and_lookup() {
    let mut env = Environment::new();
    env.define("x".into(), num(1.0));
    assert_eq!(env.lookup("x"), Some(num(1.0)));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn test_inner_scope_shadows_outer() {
    let mut env = Environment::new();
    env.define("x".into(), num(1.0));
    env.push_scope();
    env.define("x".into(), num(2.0));
    assert_eq!(env.lookup("x"), Some(num(2.0)));
    env.pop_scope();
    assert_eq!(env.lookup("x"), Some(num(1.0)));
}

#[test]
fn test_assign_updates_nearest_binding() {
    let mut env = Environment::new();
    env.define("x".into(), num(1.0));
    env.push_scope();
    assert!(env.assign("x", num(5.0)));
    env.pop_scope();
    assert_eq!(env.lookup("x"), Some(num(5.0)));
}

#[test]
fn test_assign_unbound_fails() {
    let mut env = Environment::new();
    env.push_scope();
    assert!(!env.assign("missing", num(1.0)));
    assert_eq!(env.lookup("missing"), None);
}

#[test]
fn test_global_scope_is_never_popped() {
    let mut env = Environment::new();
    env.pop_scope();
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    env.define("still".into(), Value::Bool(true));
    assert_eq!(env.lookup("still"), Some(Value::Bool(true)));
}

#[test]
fn test_define_global_from_nested_scope() {
    let mut env = Environment::new();
    env.push_scope();
    env.define_global("g".into(), num(7.0));
    env.pop_scope();
    assert_eq!(env.lookup("g"), Some(num(7.0)));
}

#[test]
fn test_call_frame_sees_captured_scope_not_caller() {
    let mut env = Environment::new();
    env.push_scope();
    env.define("captured".into(), num(1.0));
    let closure_scope = env.current_scope();
    env.pop_scope();

    env.push_scope();
    env.define("caller_local".into(), num(2.0));
    let saved = env.enter_call(closure_scope);
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup("captured"), Some(num(1.0)));
    assert_eq!(env.lookup("caller_local"), None);
    env.exit_call(saved);

    assert_eq!(env.depth(), 2);
    assert_eq!(env.lookup("caller_local"), Some(num(2.0)));
}

#[test]
fn test_closure_scope_shares_writes() {
    let mut env = Environment::new();
    env.define("x".into(), num(1.0));
    let captured = env.current_scope();
    let saved = env.enter_call(captured);
    assert!(env.assign("x", num(2.0)));
    env.exit_call(saved);
    assert_eq!(env.lookup("x"), Some(num(2.0)));
}
