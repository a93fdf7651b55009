//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::{natives, stdout_handler, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`] instances.
///
/// Defaults: output to stdout and a call depth limit of
/// [`DEFAULT_MAX_CALL_DEPTH`]. `build` always installs the built-in natives
/// into the fresh global scope.
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Maximum number of nested script calls before a fatal stack overflow.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Interpreter {
        let mut interpreter = Interpreter {
            env: Environment::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth.unwrap_or(DEFAULT_MAX_CALL_DEPTH),
            call_depth: 0,
        };
        natives::install(&mut interpreter);
        interpreter
    }
}
