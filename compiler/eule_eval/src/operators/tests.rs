use pretty_assertions::assert_eq;

use super::*;
use crate::{EvalErrorKind, Table};

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn binary(op: BinaryOp, a: f64, b: f64) -> Value {
    evaluate_binary(op, &num(a), &num(b)).unwrap()
}

#[test]
fn test_arithmetic() {
    assert_eq!(binary(BinaryOp::Add, 1.0, 2.0), num(3.0));
    assert_eq!(binary(BinaryOp::Sub, 1.0, 2.0), num(-1.0));
    assert_eq!(binary(BinaryOp::Mul, 4.0, 2.5), num(10.0));
    assert_eq!(binary(BinaryOp::Div, 7.0, 2.0), num(3.5));
    assert_eq!(binary(BinaryOp::Mod, 7.0, 3.0), num(1.0));
}

#[test]
fn test_floor_division_rounds_down() {
    assert_eq!(binary(BinaryOp::FloorDiv, 7.0, 2.0), num(3.0));
    assert_eq!(binary(BinaryOp::FloorDiv, -7.0, 2.0), num(-4.0));
}

#[test]
fn test_comparisons() {
    assert_eq!(binary(BinaryOp::Lt, 1.0, 2.0), Value::Bool(true));
    assert_eq!(binary(BinaryOp::GtEq, 2.0, 2.0), Value::Bool(true));
    assert_eq!(binary(BinaryOp::Gt, 1.0, 2.0), Value::Bool(false));
    assert_eq!(binary(BinaryOp::Lt, f64::NAN, 1.0), Value::Bool(false));
}

#[test]
fn test_string_concatenation() {
    let joined = evaluate_binary(BinaryOp::Add, &Value::string("ab"), &Value::string("cd"));
    assert_eq!(joined.unwrap(), Value::string("abcd"));
}

#[test]
fn test_equality_across_kinds() {
    let eq = evaluate_binary(BinaryOp::Eq, &num(1.0), &Value::string("1")).unwrap();
    assert_eq!(eq, Value::Bool(false));
    let ne = evaluate_binary(BinaryOp::NotEq, &Value::Nihil, &Value::Nihil).unwrap();
    assert_eq!(ne, Value::Bool(false));
}

#[test]
fn test_mixed_operands_are_type_errors() {
    let err = evaluate_binary(BinaryOp::Add, &num(1.0), &Value::string("x")).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { .. }));
    assert_eq!(
        err.message,
        "operator '+' not defined for number and string"
    );

    let err = evaluate_binary(BinaryOp::Lt, &Value::string("a"), &Value::string("b")).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { .. }));
}

#[test]
fn test_unary_operators() {
    assert_eq!(evaluate_unary(UnaryOp::Neg, &num(2.0)).unwrap(), num(-2.0));
    assert_eq!(evaluate_unary(UnaryOp::Plus, &num(2.0)).unwrap(), num(2.0));
    assert_eq!(
        evaluate_unary(UnaryOp::Not, &Value::Nihil).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Not, &num(0.0)).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn test_typeof() {
    let table = Value::table(Table::new());
    assert_eq!(
        evaluate_unary(UnaryOp::TypeOf, &table).unwrap(),
        Value::string("table")
    );
    assert_eq!(
        evaluate_unary(UnaryOp::TypeOf, &Value::Nihil).unwrap(),
        Value::string("void")
    );
}

#[test]
fn test_negating_a_string_fails() {
    let err = evaluate_unary(UnaryOp::Neg, &Value::string("x")).unwrap_err();
    assert_eq!(err.message, "unary operator '-' not defined for string");
}

#[test]
fn test_yield_is_unsupported() {
    let err = evaluate_unary(UnaryOp::Yield, &Value::Nihil).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Unsupported { .. }));
}
