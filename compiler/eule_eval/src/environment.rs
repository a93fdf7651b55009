//! Lexical scopes.
//!
//! Scopes form a parent-linked chain of [`Shared`] nodes. The
//! [`Environment`] keeps a stack of the scopes entered by the running
//! function; a call swaps that stack out for a fresh one rooted at the
//! callee's captured scope and swaps it back on return.

use rustc_hash::FxHashMap;

use eule_ir::Name;

use crate::{Shared, Value};

/// One level of bindings.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<Shared<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: Shared<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` here, replacing an existing binding of this scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look `name` up here, then outward.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        let mut scope = self.parent.clone();
        while let Some(current) = scope {
            let current = current.borrow();
            if let Some(value) = current.bindings.get(name) {
                return Some(value.clone());
            }
            scope = current.parent.clone();
        }
        None
    }

    /// Overwrite the nearest binding of `name`.
    ///
    /// Returns `false`, leaving every scope untouched, when no scope in the
    /// chain binds `name`.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return true;
        }
        let mut scope = self.parent.clone();
        while let Some(current) = scope {
            let mut current = current.borrow_mut();
            if let Some(slot) = current.bindings.get_mut(name) {
                *slot = value;
                return true;
            }
            scope = current.parent.clone();
        }
        false
    }
}

/// The scope stack of the running function, plus the global scope.
pub struct Environment {
    /// Innermost scope last; never empty.
    scopes: Vec<Shared<Scope>>,
    global: Shared<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        let global = Shared::new(Scope::new());
        Environment {
            scopes: vec![global.clone()],
            global,
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn push_scope(&mut self) {
        let parent = self.current_scope();
        self.scopes.push(Shared::new(Scope::with_parent(parent)));
    }

    /// Leave the innermost scope. The outermost scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// The innermost scope; closures capture this.
    #[inline]
    pub fn current_scope(&self) -> Shared<Scope> {
        self.scopes.last().unwrap_or(&self.global).clone()
    }

    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.scopes
            .last()
            .unwrap_or(&self.global)
            .borrow_mut()
            .define(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.scopes.last().unwrap_or(&self.global).borrow().lookup(name)
    }

    #[inline]
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        self.scopes
            .last()
            .unwrap_or(&self.global)
            .borrow_mut()
            .assign(name, value)
    }

    /// Bind `name` in the global scope, whatever scope is current.
    pub fn define_global(&mut self, name: Name, value: Value) {
        self.global.borrow_mut().define(name, value);
    }

    /// Start a function body: the stack becomes a single fresh scope whose
    /// parent is `captured`. Returns the caller's stack for
    /// [`Environment::exit_call`].
    #[must_use]
    pub fn enter_call(&mut self, captured: Shared<Scope>) -> Vec<Shared<Scope>> {
        let frame = Shared::new(Scope::with_parent(captured));
        std::mem::replace(&mut self.scopes, vec![frame])
    }

    /// Restore the caller's stack saved by [`Environment::enter_call`].
    pub fn exit_call(&mut self, saved: Vec<Shared<Scope>>) {
        self.scopes = saved;
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
