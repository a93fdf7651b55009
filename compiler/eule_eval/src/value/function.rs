//! Callable values.

use std::fmt;
use std::rc::Rc;

use eule_ir::{FunctionLit, Name};

use crate::{Interpreter, Scope, Shared, Value};

/// A function literal closed over the scope it was evaluated in.
///
/// The scope is held by reference: later writes to captured variables are
/// visible to the closure and the other way round.
pub struct Closure {
    /// Declared name; `None` for function expressions.
    pub name: Option<Name>,
    pub function: Rc<FunctionLit>,
    pub env: Shared<Scope>,
}

impl Closure {
    pub fn arity(&self) -> usize {
        self.function.params.len()
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("name", &self.name)
            .field("params", &self.function.params)
            .field("kind", &self.function.kind)
            .finish_non_exhaustive()
    }
}

/// Host function signature.
///
/// `Err(value)` throws `value` as a script exception, catchable by `try`.
pub type NativeFn = fn(&mut Interpreter, Vec<Value>) -> Result<Value, Value>;

/// A host function installed into the global scope.
pub struct Native {
    pub name: &'static str,
    pub func: NativeFn,
}

impl fmt::Debug for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Native").field("name", &self.name).finish()
    }
}
