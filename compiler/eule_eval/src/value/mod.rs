//! Runtime values.
//!
//! Primitives are held inline; tables and functions are reference types
//! compared by identity. Strings are immutable and compared by content.

mod function;
mod table;

use std::fmt;
use std::rc::Rc;

pub use function::{Closure, Native, NativeFn};
pub use table::{Table, TableKey};
pub(crate) use table::lookup;

use crate::Shared;

#[derive(Clone)]
pub enum Value {
    Nihil,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Table(Shared<Table>),
    Closure(Rc<Closure>),
    Native(Rc<Native>),
    /// Result slot of an async call. Never produced by the evaluator today.
    Future,
}

impl Value {
    pub fn string(text: &str) -> Self {
        Value::String(Rc::from(text))
    }

    pub fn table(table: Table) -> Self {
        Value::Table(Shared::new(table))
    }

    /// Name reported by `typeof`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nihil => "void",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Closure(_) | Value::Native(_) => "function",
            Value::Table(_) => "table",
            Value::Future => "future",
        }
    }

    /// Only `void` and `false` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nihil | Value::Bool(false))
    }

    /// `==` semantics.
    #[allow(clippy::float_cmp, reason = "numeric equality is IEEE equality")]
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nihil, Value::Nihil) | (Value::Future, Value::Future) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Table(a), Value::Table(b)) => a.ptr_eq(b),
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Native(a), Value::Native(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nihil => f.write_str("void"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => format_number(*n, f),
            Value::String(s) => f.write_str(s),
            Value::Table(t) => write!(f, "<table {:p}>", t.addr()),
            Value::Closure(c) => match &c.name {
                Some(name) => write!(f, "<function {name}>"),
                None => f.write_str("<function>"),
            },
            Value::Native(n) => write!(f, "<native {}>", n.name),
            Value::Future => f.write_str("<future>"),
        }
    }
}

/// Reference values may form cycles, so debug output never recurses into
/// them.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s:?}"),
            Value::Number(n) => write!(f, "{n:?}"),
            other => write!(f, "{other}"),
        }
    }
}

/// Shortest round-trip text; integral values have no fraction and very
/// large or very small magnitudes use exponent notation (`1e21`).
fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        // Also covers -0.
        return f.write_str("0");
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        write!(f, "{n:e}")
    } else {
        write!(f, "{n}")
    }
}
