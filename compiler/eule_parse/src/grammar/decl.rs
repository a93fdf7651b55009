//! Declarations: variables, named functions and the recovery boundary.

use std::rc::Rc;

use eule_ir::{Decl, Expr, FunctionKind, TokenKind, VarBinding};
use tracing::{debug, trace};

use crate::recovery::{synchronize, STMT_BOUNDARY};
use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse one declaration.
    ///
    /// On error the declaration becomes [`Decl::Error`] and the cursor is
    /// moved to the next statement boundary. At least one token is consumed
    /// so the caller's loop always makes progress.
    pub(crate) fn declaration(&mut self) -> Decl {
        let start = self.cursor.consumed();
        match self.declaration_inner() {
            Ok(decl) => decl,
            Err(error) => {
                debug!(
                    line = error.line,
                    code = %error.code,
                    message = %error.message,
                    "recovering from parse error"
                );
                self.errors.push(error);
                let skipped = synchronize(&mut self.cursor, STMT_BOUNDARY);
                if self.cursor.consumed() == start && !self.cursor.is_at_end() {
                    self.advance();
                }
                trace!(skipped, "resynchronized");
                Decl::Error
            }
        }
    }

    fn declaration_inner(&mut self) -> Result<Decl, ParseError> {
        match self.current_kind() {
            TokenKind::Var => {
                self.advance();
                let bindings = self.in_error_context(ErrorContext::VariableDecl, |p| {
                    let bindings = p.variable_bindings()?;
                    p.terminator("variable declaration")?;
                    Ok(bindings)
                })?;
                Ok(Decl::Variable(bindings))
            }
            TokenKind::Function => {
                self.advance();
                self.function_decl(false)
            }
            TokenKind::Async => {
                self.advance();
                self.expect(TokenKind::Function, "expected 'function' after 'async'")?;
                self.function_decl(true)
            }
            _ => Ok(Decl::Stmt(self.statement()?)),
        }
    }

    /// `a = 1, b, c = a` after `var`; a missing initializer is `void`.
    pub(crate) fn variable_bindings(&mut self) -> Result<Vec<VarBinding>, ParseError> {
        let mut bindings = Vec::new();
        loop {
            let name = self.expect_ident("expected variable name")?;
            let init = if self.eat(TokenKind::Eq) {
                self.expression()?
            } else {
                Expr::Nihil
            };
            trace!(name = %name, "variable binding");
            bindings.push(VarBinding::new(name, init));
            if !self.eat(TokenKind::Comma) {
                return Ok(bindings);
            }
        }
    }

    /// `function [*]name(params) body` after `function` (and `async`).
    fn function_decl(&mut self, is_async: bool) -> Result<Decl, ParseError> {
        let line = self.previous().line;
        self.in_error_context(ErrorContext::FunctionDecl, |p| {
            let is_generator = p.eat(TokenKind::Star);
            let name = p.expect_ident("expected function name")?;
            let kind = FunctionKind::new(is_async, is_generator);
            let (function, is_arrow) = p.function_tail(kind, line)?;
            if is_arrow {
                p.terminator("arrow function body")?;
            }
            trace!(name = %name, kind = kind.describe(), "function declaration");
            Ok(Decl::Function {
                name,
                function: Rc::new(function),
            })
        })
    }
}
