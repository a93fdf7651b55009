//! Host functions installed into every global scope.

use std::rc::Rc;

use crate::{Interpreter, Native, NativeFn, Value};

const NATIVES: &[(&str, NativeFn)] = &[("print", print)];

pub(crate) fn install(interpreter: &mut Interpreter) {
    for &(name, func) in NATIVES {
        interpreter.define_global(name, Value::Native(Rc::new(Native { name, func })));
    }
}

/// `print(...)`: display forms separated by spaces, then a newline.
#[allow(
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,
    reason = "natives share one calling convention"
)]
fn print(interpreter: &mut Interpreter, args: Vec<Value>) -> Result<Value, Value> {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    interpreter.print_handler().println(&line);
    Ok(Value::Nihil)
}
