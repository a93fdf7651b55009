//! Abstract syntax tree.
//!
//! Three closed node families mirror the grammar: [`Decl`] for anything that
//! can appear in a block, [`Stmt`] for control flow, and [`Expr`] for values.
//! The tree is built once by the parser and never mutated afterwards.

mod expr;
mod operators;
mod stmt;

use std::rc::Rc;

pub use expr::{Expr, FunctionKind, FunctionLit, TableEntry};
pub use operators::{BinaryOp, LogicalOp, UnaryOp, UpdateOp};
pub use stmt::Stmt;

/// Identifier text. Shared so scopes and closures can clone names cheaply.
pub type Name = Rc<str>;

/// A sequence of declarations: a script, a block or a function body.
pub type Block = Vec<Decl>;

/// Top-level and block-level declarations.
#[derive(Clone, Debug, PartialEq)]
pub enum Decl {
    /// Placeholder left where a declaration failed to parse.
    ///
    /// Never evaluated: a parse with errors does not reach the evaluator.
    Error,
    /// `var a = 1, b;`
    Variable(Vec<VarBinding>),
    /// `function name(params) { body }`
    Function { name: Name, function: Rc<FunctionLit> },
    Stmt(Stmt),
}

/// One `name = init` pair of a variable declaration.
///
/// `init` is always present: `var x;` is desugared to `var x = void;`.
#[derive(Clone, Debug, PartialEq)]
pub struct VarBinding {
    pub name: Name,
    pub init: Expr,
}

impl VarBinding {
    pub fn new(name: Name, init: Expr) -> Self {
        VarBinding { name, init }
    }
}

#[cfg(test)]
mod tests;
