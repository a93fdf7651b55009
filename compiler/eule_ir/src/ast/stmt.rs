//! Statement nodes.

use super::{Block, Decl, Expr, Name};

/// Statements.
///
/// `Break` and `Continue` keep their line so a signal that escapes a
/// function body can still be reported against the source.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// A lone `;`.
    Empty,
    Block(Block),
    /// `if ([init;] cond) then [else otherwise]`
    If {
        init: Option<Box<Decl>>,
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `for (init; cond; post) body`. Missing `cond`/`post` are [`Expr::Empty`].
    For {
        init: Option<Box<Decl>>,
        cond: Expr,
        post: Expr,
        body: Box<Stmt>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        cond: Expr,
    },
    Continue {
        line: u32,
    },
    Break {
        line: u32,
    },
    Throw {
        value: Expr,
    },
    /// `try {} catch (name) {} finally {}`: at least one of `catch`/`finally`.
    Try {
        body: Block,
        catch: Option<Block>,
        catch_binding: Option<Name>,
        finally: Option<Block>,
    },
    /// `return [value];`. A bare `return` carries [`Expr::Empty`].
    Return {
        value: Expr,
    },
    Expr(Expr),
}
