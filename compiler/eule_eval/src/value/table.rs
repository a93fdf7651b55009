//! Tables: an array part, a string-keyed map part and an optional
//! prototype.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::{invalid_index, type_mismatch, EvalResult};
use crate::{Shared, Value};

/// A validated table key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableKey {
    /// Addresses the map part.
    Name(Rc<str>),
    /// Addresses the array part.
    Index(usize),
}

impl TableKey {
    /// Strings select the map part and non-negative integral numbers the
    /// array part. Other numbers are invalid indices; other kinds are type
    /// errors.
    pub fn from_value(key: &Value) -> EvalResult<Self> {
        match key {
            Value::String(name) => Ok(TableKey::Name(Rc::clone(name))),
            Value::Number(n) => {
                if n.fract() != 0.0 || *n < 0.0 {
                    return Err(invalid_index(format!(
                        "{} is not a non-negative integer",
                        Value::Number(*n)
                    )));
                }
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "checked non-negative and integral; huge values saturate and miss"
                )]
                let index = *n as usize;
                Ok(TableKey::Index(index))
            }
            other => Err(type_mismatch("table key", other.type_name())),
        }
    }
}

#[derive(Default)]
pub struct Table {
    proto: Option<Shared<Table>>,
    array: Vec<Value>,
    map: FxHashMap<Rc<str>, Value>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proto(proto: Shared<Table>) -> Self {
        Table {
            proto: Some(proto),
            ..Self::default()
        }
    }

    pub fn array_len(&self) -> usize {
        self.array.len()
    }

    pub fn map_len(&self) -> usize {
        self.map.len()
    }

    /// Append to the array part.
    pub fn push(&mut self, value: Value) {
        self.array.push(value);
    }

    /// Own storage only; the prototype is not consulted.
    pub fn get_own(&self, key: &TableKey) -> Option<Value> {
        match key {
            TableKey::Name(name) => self.map.get(name).cloned(),
            TableKey::Index(index) => self.array.get(*index).cloned(),
        }
    }

    /// Write into own storage.
    ///
    /// An index may overwrite an element or append at exactly the current
    /// length; anything further out is an error.
    pub fn set(&mut self, key: TableKey, value: Value) -> EvalResult<()> {
        match key {
            TableKey::Name(name) => {
                self.map.insert(name, value);
            }
            TableKey::Index(index) => {
                let len = self.array.len();
                if index < len {
                    self.array[index] = value;
                } else if index == len {
                    self.array.push(value);
                } else {
                    return Err(invalid_index(format!(
                        "write to index {index} of an array part of length {len}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Read `key` from `table`, then along its prototype chain. A miss
/// everywhere reads as `void`.
pub(crate) fn lookup(table: &Shared<Table>, key: &TableKey) -> Value {
    let mut current = table.clone();
    loop {
        let proto = {
            let borrowed = current.borrow();
            if let Some(value) = borrowed.get_own(key) {
                return value;
            }
            borrowed.proto.clone()
        };
        match proto {
            Some(proto) => current = proto,
            None => return Value::Nihil,
        }
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.map.keys().map(AsRef::as_ref).collect();
        keys.sort_unstable();
        f.debug_struct("Table")
            .field("array", &self.array)
            .field("keys", &keys)
            .field("has_proto", &self.proto.is_some())
            .finish()
    }
}
