//! Statement outcomes and the control-flow plumbing between them.
//!
//! Statements finish with a [`Completion`]; anything other than
//! [`Completion::Normal`] unwinds through enclosing statements until a
//! loop, function or `try` intercepts it. Expressions produce a value or
//! an [`Abrupt`] exit, since a call inside an expression can throw.
//! Fatal [`EvalError`]s travel beside both and are never intercepted.

use crate::{EvalError, Value};

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    Normal(Value),
    Break,
    Continue,
    Return(Value),
    Throw(Value),
}

impl Completion {
    pub fn normal() -> Self {
        Completion::Normal(Value::Nihil)
    }
}

/// Non-value exit of an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Abrupt {
    /// A script exception on its way to the nearest `try`.
    Throw(Value),
    Error(EvalError),
}

impl From<EvalError> for Abrupt {
    fn from(error: EvalError) -> Self {
        Abrupt::Error(error)
    }
}

/// Result of evaluating an expression.
pub type ExprResult = Result<Value, Abrupt>;

/// Result of executing a statement.
pub type ExecResult = Result<Completion, EvalError>;

/// Unwrap an [`ExprResult`] inside a statement executor.
///
/// A throw becomes the statement's [`Completion::Throw`]; a fatal error is
/// returned as is.
macro_rules! value_or_throw {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err($crate::completion::Abrupt::Throw(value)) => {
                return Ok($crate::completion::Completion::Throw(value));
            }
            Err($crate::completion::Abrupt::Error(error)) => return Err(error),
        }
    };
}

/// Unwrap a [`Completion::Normal`] value, returning any other completion
/// from the enclosing executor.
macro_rules! normal_or_return {
    ($completion:expr) => {
        match $completion {
            $crate::completion::Completion::Normal(value) => value,
            other => return Ok(other),
        }
    };
}

pub(crate) use {normal_or_return, value_or_throw};
