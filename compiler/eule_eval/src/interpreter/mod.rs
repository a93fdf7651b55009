//! The tree-walking interpreter.
//!
//! Statement execution lives in `stmt`, expression evaluation in `expr`
//! and function application in `call`. All three share one
//! [`Interpreter`]: its [`Environment`] holds the scope stack of the
//! running function and the global scope.

mod builder;
mod call;
mod expr;
mod scope_guard;
mod stmt;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use eule_ir::{Decl, Name};
use tracing::debug;

use crate::errors::{escaped_jump, uncaught_throw, EvalResult};
use crate::{Completion, Environment, SharedPrintHandler, Value};

/// Default bound on nested script calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) max_call_depth: usize,
    pub(crate) call_depth: usize,
}

impl Interpreter {
    /// Interpreter with stdout output, the default depth limit and the
    /// built-in natives.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Run a script's top-level declarations.
    ///
    /// Returns the value of the last declaration that completed normally.
    /// A top-level `return` ends the run with its value. An uncaught throw
    /// and a `break`/`continue` outside any loop are fatal.
    pub fn evaluate(&mut self, decls: &[Decl]) -> EvalResult<Value> {
        let mut last = Value::Nihil;
        for decl in decls {
            match self.exec_decl(decl)? {
                Completion::Normal(value) => last = value,
                Completion::Return(value) => return Ok(value),
                Completion::Throw(value) => {
                    debug!(value = %value, "uncaught throw");
                    return Err(uncaught_throw(value.to_string()));
                }
                Completion::Break => return Err(escaped_jump("break")),
                Completion::Continue => return Err(escaped_jump("continue")),
            }
        }
        Ok(last)
    }

    /// Bind a value in the global scope.
    pub fn define_global(&mut self, name: impl Into<Name>, value: Value) {
        self.env.define_global(name.into(), value);
    }

    /// Look a name up from the current scope outward.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.env.lookup(name)
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of script calls currently active.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
