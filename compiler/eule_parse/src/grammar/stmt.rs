//! Statements.

use eule_diagnostic::ErrorCode;
use eule_ir::{Block, Decl, Expr, Stmt, TokenKind};
use tracing::trace;

use crate::{ErrorContext, ParseContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::LBrace => {
                self.advance();
                Ok(Stmt::Block(self.block()?))
            }
            TokenKind::If => {
                self.advance();
                self.in_error_context(ErrorContext::IfStatement, Self::if_stmt)
            }
            TokenKind::For => {
                self.advance();
                self.in_error_context(ErrorContext::ForLoop, Self::for_stmt)
            }
            TokenKind::ForEach => Err(ParseError::at(
                self.current(),
                ErrorCode::E1001,
                "'foreach' loops are not supported",
            )),
            TokenKind::While => {
                self.advance();
                self.in_error_context(ErrorContext::WhileLoop, Self::while_stmt)
            }
            TokenKind::Do => {
                self.advance();
                self.in_error_context(ErrorContext::DoWhileLoop, Self::do_while_stmt)
            }
            TokenKind::Continue | TokenKind::Break => self.jump_stmt(),
            TokenKind::Throw => {
                self.advance();
                let value = self.expression()?;
                self.terminator("thrown value")?;
                Ok(Stmt::Throw { value })
            }
            TokenKind::Try => {
                self.advance();
                self.in_error_context(ErrorContext::TryStatement, Self::try_stmt)
            }
            TokenKind::Return => self.return_stmt(),
            TokenKind::Semicolon => {
                self.advance();
                Ok(Stmt::Empty)
            }
            _ => {
                let expr = self.expression()?;
                self.terminator("expression")?;
                Ok(Stmt::Expr(expr))
            }
        }
    }

    /// Declarations up to the closing `}`; the `{` is already consumed.
    pub(crate) fn block(&mut self) -> Result<Block, ParseError> {
        let mut decls = Vec::new();
        loop {
            self.skip_newlines();
            if self.eat(TokenKind::RBrace) {
                trace!(len = decls.len(), "block");
                return Ok(decls);
            }
            if self.cursor.is_at_end() {
                return Err(ParseError::at(self.current(), ErrorCode::E1003, "expected '}'")
                    .with_context(ErrorContext::Block));
            }
            decls.push(self.declaration());
        }
    }

    /// Parse a loop body with `break` and `continue` enabled.
    fn loop_body(&mut self) -> Result<Stmt, ParseError> {
        let context = self.context.with(ParseContext::IN_LOOP);
        self.with_context(context, |p| {
            p.skip_newlines();
            p.statement()
        })
    }

    /// `if ([var x = e; | e;] cond) then [else otherwise]`
    fn if_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "expected '(' after 'if'")?;
        let (init, cond) = if self.eat(TokenKind::Var) {
            let bindings = self.variable_bindings()?;
            self.expect(TokenKind::Semicolon, "expected ';' after if initializer")?;
            (Some(Box::new(Decl::Variable(bindings))), self.expression()?)
        } else {
            let first = self.expression()?;
            if self.eat(TokenKind::Semicolon) {
                let init = Decl::Stmt(Stmt::Expr(first));
                (Some(Box::new(init)), self.expression()?)
            } else {
                (None, first)
            }
        };
        self.expect(TokenKind::RParen, "expected ')' after condition")?;

        self.skip_newlines();
        let then_branch = Box::new(self.statement()?);
        self.skip_newlines();
        let else_branch = if self.eat(TokenKind::Else) {
            self.skip_newlines();
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Stmt::If {
            init,
            cond,
            then_branch,
            else_branch,
        })
    }

    /// `for (init; cond; post) body`, every clause optional.
    fn for_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "expected '(' after 'for'")?;

        let init = if self.eat(TokenKind::Semicolon) {
            None
        } else if self.eat(TokenKind::Var) {
            let bindings = self.variable_bindings()?;
            self.expect(TokenKind::Semicolon, "expected ';' after loop initializer")?;
            Some(Box::new(Decl::Variable(bindings)))
        } else {
            let expr = self.expression()?;
            self.expect(TokenKind::Semicolon, "expected ';' after loop initializer")?;
            Some(Box::new(Decl::Stmt(Stmt::Expr(expr))))
        };

        let cond = if self.check(TokenKind::Semicolon) {
            Expr::Empty
        } else {
            self.expression()?
        };
        self.expect(TokenKind::Semicolon, "expected ';' after loop condition")?;

        let post = if self.check(TokenKind::RParen) {
            Expr::Empty
        } else {
            self.expression()?
        };
        self.expect(TokenKind::RParen, "expected ')' after for clauses")?;

        let body = Box::new(self.loop_body()?);
        Ok(Stmt::For {
            init,
            cond,
            post,
            body,
        })
    }

    fn while_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "expected '(' after 'while'")?;
        let cond = self.expression()?;
        self.expect(TokenKind::RParen, "expected ')' after condition")?;
        let body = Box::new(self.loop_body()?);
        Ok(Stmt::While { cond, body })
    }

    /// `do body while (cond)` with an optional trailing `;`.
    fn do_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let body = Box::new(self.loop_body()?);
        self.skip_newlines();
        self.expect(TokenKind::While, "expected 'while' after do-while body")?;
        self.expect(TokenKind::LParen, "expected '(' after 'while'")?;
        let cond = self.expression()?;
        self.expect(TokenKind::RParen, "expected ')' after condition")?;
        if !self.eat(TokenKind::Semicolon) {
            self.cursor.eat(TokenKind::NewLine);
        }
        Ok(Stmt::DoWhile { body, cond })
    }

    /// `break;` or `continue;`, only valid inside a loop of this function.
    fn jump_stmt(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.advance();
        if !self.context.in_loop() {
            self.report(ParseError::at(
                keyword,
                ErrorCode::E1007,
                format!("'{}' outside a loop", keyword.lexeme),
            ));
        }
        self.terminator(keyword.lexeme)?;
        Ok(if keyword.kind == TokenKind::Break {
            Stmt::Break { line: keyword.line }
        } else {
            Stmt::Continue { line: keyword.line }
        })
    }

    /// `try { } [catch [(name)] { }] [finally { }]`
    fn try_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LBrace, "expected '{' after 'try'")?;
        let body = self.block()?;
        self.skip_newlines();

        let (catch, catch_binding) = if self.eat(TokenKind::Catch) {
            let binding = if self.eat(TokenKind::LParen) {
                let name = self.expect_ident("expected exception variable name")?;
                self.expect(TokenKind::RParen, "expected ')' after exception variable")?;
                self.skip_newlines();
                Some(name)
            } else {
                None
            };
            self.expect(TokenKind::LBrace, "expected '{' after 'catch'")?;
            let block = self.block()?;
            self.skip_newlines();
            (Some(block), binding)
        } else {
            (None, None)
        };

        let finally = if self.eat(TokenKind::Finally) {
            self.expect(TokenKind::LBrace, "expected '{' after 'finally'")?;
            Some(self.block()?)
        } else {
            None
        };

        if catch.is_none() && finally.is_none() {
            return Err(ParseError::at(
                self.current(),
                ErrorCode::E1009,
                "expected 'catch' or 'finally' after try block",
            ));
        }
        Ok(Stmt::Try {
            body,
            catch,
            catch_binding,
            finally,
        })
    }

    /// `return [value];`, only valid inside a function.
    fn return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.advance();
        if !self.context.in_function() {
            self.report(ParseError::at(
                keyword,
                ErrorCode::E1006,
                "'return' outside a function",
            ));
        }
        let value = if self.at_statement_end() {
            Expr::Empty
        } else {
            self.expression()?
        };
        self.terminator("return value")?;
        Ok(Stmt::Return { value })
    }

    /// Whether the current token ends a statement without an expression.
    fn at_statement_end(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Semicolon | TokenKind::NewLine | TokenKind::RBrace | TokenKind::Eof
        )
    }
}
