//! RAII scope management.
//!
//! [`ScopedInterpreter`] pushes a scope when created and pops it when
//! dropped, so every exit path out of a block, loop iteration or `catch`
//! body leaves the scope stack as it found it, `?` returns included.

use std::ops::{Deref, DerefMut};

use eule_ir::Name;

use super::Interpreter;
use crate::Value;

/// Guard over an interpreter with one extra scope pushed.
///
/// Derefs to [`Interpreter`], so the guarded code calls interpreter
/// methods directly.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a scope that is popped when the guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` in a fresh scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    /// Run `f` in a fresh scope that starts with `name` bound to `value`.
    pub fn with_binding<T, F>(&mut self, name: Name, value: Value, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        self.with_env_scope(|scoped| {
            scoped.env.define(name, value);
            f(scoped)
        })
    }
}
