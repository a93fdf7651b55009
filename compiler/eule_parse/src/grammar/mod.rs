//! Grammar productions, one module per syntactic family.

mod decl;
mod expr;
mod literal;
mod stmt;
