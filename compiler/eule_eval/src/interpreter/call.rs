//! Function application.

use std::rc::Rc;

use eule_ir::FunctionKind;
use eule_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Interpreter;
use crate::errors::{escaped_jump, not_callable, stack_overflow, unsupported};
use crate::{Abrupt, Closure, Completion, ExprResult, Value};

impl Interpreter {
    /// Call `callee` with already evaluated arguments.
    ///
    /// A native's `Err` and a closure's uncaught throw both come back as
    /// [`Abrupt::Throw`]. `line` locates errors raised by the call itself.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = %callee, args = args.len()))]
    pub fn call(&mut self, callee: &Value, args: Vec<Value>, line: u32) -> ExprResult {
        match callee {
            Value::Native(native) => (native.func)(self, args).map_err(Abrupt::Throw),
            Value::Closure(closure) => self.call_closure(closure, args, line),
            other => Err(not_callable(other.type_name()).at_line(line).into()),
        }
    }

    fn call_closure(&mut self, closure: &Rc<Closure>, args: Vec<Value>, line: u32) -> ExprResult {
        let function = &closure.function;
        if function.kind != FunctionKind::Sync {
            let construct = format!("{} call", function.kind.describe());
            return Err(unsupported(construct).at_line(line).into());
        }
        if self.call_depth >= self.max_call_depth {
            return Err(stack_overflow(self.max_call_depth).at_line(line).into());
        }
        trace!(
            depth = self.call_depth,
            arity = closure.arity(),
            "enter function"
        );

        self.call_depth += 1;
        let saved = self.env.enter_call(closure.env.clone());
        let mut args = args.into_iter();
        for param in &function.params {
            let value = args.next().unwrap_or(Value::Nihil);
            self.env.define(Rc::clone(param), value);
        }
        let result = ensure_sufficient_stack(|| self.exec_decls(&function.body));
        self.env.exit_call(saved);
        self.call_depth -= 1;

        match result? {
            Completion::Normal(_) => Ok(Value::Nihil),
            Completion::Return(value) => Ok(value),
            Completion::Throw(value) => Err(Abrupt::Throw(value)),
            Completion::Break => Err(escaped_jump("break").at_line(line).into()),
            Completion::Continue => Err(escaped_jump("continue").at_line(line).into()),
        }
    }
}
