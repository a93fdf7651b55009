//! Eule Eval - tree-walking evaluator for eule scripts.
//!
//! # Architecture
//!
//! - `Environment`: parent-linked scopes behind a per-call scope stack
//! - `Completion`: how a statement finished (normal, break, continue,
//!   return, throw); control flow is data, not unwinding
//! - `evaluate_binary` / `evaluate_unary`: enum-dispatched strict operators
//! - `Table`: array part, map part and prototype chain
//! - `Interpreter`: statement and expression walk, calls, natives
//!
//! Script exceptions are `Completion::Throw` values. An [`EvalError`] is
//! fatal: it aborts the run and no script `try` can intercept it.

mod completion;
mod environment;
pub mod errors;
pub mod interpreter;
mod natives;
mod operators;
mod print_handler;
mod shared;
mod value;

pub use completion::{Abrupt, Completion, ExecResult, ExprResult};
pub use environment::{Environment, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use shared::Shared;
pub use value::{Closure, Native, NativeFn, Table, TableKey, Value};
