//! Strict operators.
//!
//! Dispatch is a match on the operand pair. Arithmetic and ordering are
//! defined on numbers only; `+` also concatenates two strings. Equality is
//! defined on everything.

use std::cmp::Ordering;

use eule_ir::{BinaryOp, UnaryOp};

use crate::errors::{type_mismatch, unsupported, EvalError, EvalResult};
use crate::Value;

pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult<Value> {
    match op {
        BinaryOp::Eq => return Ok(Value::Bool(left.equals(right))),
        BinaryOp::NotEq => return Ok(Value::Bool(!left.equals(right))),
        _ => {}
    }
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(eval_number_binary(*a, *b, op)),
        (Value::String(a), Value::String(b)) if op == BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::String(joined.into()))
        }
        _ => Err(binary_mismatch(op, left, right)),
    }
}

fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => Value::Number(a / b),
        BinaryOp::Mod => Value::Number(a % b),
        BinaryOp::FloorDiv => Value::Number((a / b).floor()),
        // IEEE ordering: every comparison with NaN is false.
        BinaryOp::Lt => Value::Bool(a.partial_cmp(&b) == Some(Ordering::Less)),
        BinaryOp::LtEq => Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Less | Ordering::Equal)
        )),
        BinaryOp::Gt => Value::Bool(a.partial_cmp(&b) == Some(Ordering::Greater)),
        BinaryOp::GtEq => Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Greater | Ordering::Equal)
        )),
        BinaryOp::Eq => Value::Bool(a.partial_cmp(&b) == Some(Ordering::Equal)),
        BinaryOp::NotEq => Value::Bool(a.partial_cmp(&b) != Some(Ordering::Equal)),
    }
}

pub fn evaluate_unary(op: UnaryOp, value: &Value) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOp::Plus, Value::Number(n)) => Ok(Value::Number(*n)),
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Not, v) => Ok(Value::Bool(!v.is_truthy())),
        (UnaryOp::TypeOf, v) => Ok(Value::string(v.type_name())),
        (UnaryOp::Yield, _) => Err(unsupported("'yield'")),
        (UnaryOp::Plus | UnaryOp::Neg, v) => Err(type_mismatch(
            format!("unary operator '{}'", op.as_symbol()),
            v.type_name(),
        )),
    }
}

#[cold]
fn binary_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    type_mismatch(
        format!("operator '{}'", op.as_symbol()),
        format!("{} and {}", left.type_name(), right.type_name()),
    )
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
