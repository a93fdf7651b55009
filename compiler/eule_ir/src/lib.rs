//! Eule IR - shared syntax types
//!
//! This crate contains the data structures every stage of the interpreter
//! agrees on:
//! - Spans for source locations
//! - Tokens and token kinds produced by the scanner
//! - AST nodes (declarations, statements, expressions)
//! - Operator enums shared by the parser and the evaluator
//!
//! # Design Philosophy
//!
//! - **Closed sums**: every node family is an enum, so adding a variant
//!   forces every `match` in the parser and evaluator to handle it.
//! - **Strict tree**: nodes own their children; function bodies are
//!   reference counted so closures can share them without cloning.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, Block, Decl, Expr, FunctionKind, FunctionLit, LogicalOp, Name, Stmt, TableEntry,
    UnaryOp, UpdateOp, VarBinding,
};
pub use span::Span;
pub use token::{Token, TokenKind, TOKEN_KIND_COUNT};
