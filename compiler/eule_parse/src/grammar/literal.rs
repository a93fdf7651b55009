//! Table, array and function literals and the comma-separated lists
//! they share with call arguments.

use std::rc::Rc;

use eule_ir::{Block, Decl, Expr, FunctionKind, FunctionLit, Name, Stmt, TableEntry, TokenKind};
use tracing::trace;

use crate::{ErrorContext, ParseContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse `item (, item)* [,]` up to `close`, which is consumed.
    fn comma_list<T>(
        &mut self,
        close: TokenKind,
        close_message: &str,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        loop {
            self.skip_newlines();
            if self.eat(close) {
                return Ok(items);
            }
            items.push(item(self)?);
            self.skip_newlines();
            if !self.eat(TokenKind::Comma) {
                self.skip_newlines();
                self.expect(close, close_message)?;
                return Ok(items);
            }
        }
    }

    /// `{ [k]: v, name: v, :name, }` after `{`.
    pub(crate) fn table_literal(&mut self) -> Result<Expr, ParseError> {
        let pairs = self.table_entries()?;
        Ok(Expr::Table {
            pairs,
            array: Vec::new(),
        })
    }

    /// Entries of a table literal; shared with `proto { ... }`.
    pub(crate) fn table_entries(&mut self) -> Result<Vec<TableEntry>, ParseError> {
        self.in_error_context(ErrorContext::TableLiteral, |p| {
            p.comma_list(TokenKind::RBrace, "expected '}' after table entries", Self::table_entry)
        })
    }

    fn table_entry(&mut self) -> Result<TableEntry, ParseError> {
        if self.eat(TokenKind::LBracket) {
            let key = self.expression()?;
            self.expect(TokenKind::RBracket, "expected ']' after computed key")?;
            self.expect(TokenKind::Colon, "expected ':' after key")?;
            let value = self.expression()?;
            return Ok(TableEntry::new(key, value));
        }
        if self.eat(TokenKind::Colon) {
            // `:name` is shorthand for `name: name`.
            let token = self.expect(TokenKind::Ident, "expected name after ':'")?;
            let name = Name::from(token.lexeme);
            let value = Expr::Identifier {
                name: Rc::clone(&name),
                line: token.line,
            };
            return Ok(TableEntry::new(Expr::String(name), value));
        }
        let name = self.expect_ident("expected property name")?;
        self.expect(TokenKind::Colon, "expected ':' after property name")?;
        let value = self.expression()?;
        Ok(TableEntry::new(Expr::String(name), value))
    }

    /// `[a, b, ]` after `[`.
    pub(crate) fn array_literal(&mut self) -> Result<Expr, ParseError> {
        let array = self.in_error_context(ErrorContext::ArrayLiteral, |p| {
            p.comma_list(TokenKind::RBracket, "expected ']' after array elements", Self::expression)
        })?;
        Ok(Expr::Table {
            pairs: Vec::new(),
            array,
        })
    }

    /// Arguments after `(`.
    pub(crate) fn call_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.in_error_context(ErrorContext::CallArguments, |p| {
            p.comma_list(TokenKind::RParen, "expected ')' after arguments", Self::expression)
        })
    }

    /// `function [*](params) body` in expression position, after `function`.
    pub(crate) fn function_literal(&mut self) -> Result<Expr, ParseError> {
        let line = self.previous().line;
        self.in_error_context(ErrorContext::FunctionLiteral, |p| {
            let kind = FunctionKind::new(false, p.eat(TokenKind::Star));
            let (function, _) = p.function_tail(kind, line)?;
            Ok(Expr::Function(Rc::new(function)))
        })
    }

    /// Parameters and body of any function form.
    ///
    /// Returns the literal and whether the arrow form `=> expr` was used.
    pub(crate) fn function_tail(
        &mut self,
        kind: FunctionKind,
        line: u32,
    ) -> Result<(FunctionLit, bool), ParseError> {
        self.expect(TokenKind::LParen, "expected '(' before parameters")?;
        let params = self.in_error_context(ErrorContext::Parameters, |p| {
            p.comma_list(TokenKind::RParen, "expected ')' after parameters", |p| {
                p.expect_ident("expected parameter name")
            })
        })?;

        let context = ParseContext::for_function(kind);
        let (body, is_arrow) = self.with_context(context, Self::function_body)?;
        trace!(params = params.len(), arrow = is_arrow, "function literal");
        Ok((
            FunctionLit {
                params,
                body,
                kind,
                line,
            },
            is_arrow,
        ))
    }

    fn function_body(&mut self) -> Result<(Block, bool), ParseError> {
        if self.cursor.mode().arrow_functions && self.eat(TokenKind::Arrow) {
            let value = self.expression()?;
            return Ok((vec![Decl::Stmt(Stmt::Return { value })], true));
        }
        self.skip_newlines();
        self.expect(TokenKind::LBrace, "expected '{' before function body")?;
        Ok((self.block()?, false))
    }
}
