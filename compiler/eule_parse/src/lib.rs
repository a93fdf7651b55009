//! Recursive descent parser for eule.
//!
//! Declarations and statements are parsed by recursive descent; expressions
//! use precedence climbing (Pratt parsing) over the table in
//! `grammar::expr`.
//!
//! # Error Recovery
//!
//! A failed declaration is recorded, replaced by [`Decl::Error`] and the
//! parser skips to the next statement boundary (see `recovery`). Context
//! errors such as `return` at top level are recorded without abandoning the
//! surrounding declaration. All errors are returned together; callers decide
//! whether a partial tree is usable.

mod context;
mod cursor;
mod error;
mod grammar;
mod recovery;

use eule_diagnostic::{Diagnostic, ErrorCode};
use eule_ir::{Decl, Name, Token, TokenKind};
use eule_lexer::{LanguageMode, Scanner, SourceBuffer};
use tracing::debug;

pub use context::ParseContext;
use cursor::Cursor;
pub use error::{ErrorContext, ParseError};

/// Output of a parse: the declarations and every error encountered.
#[derive(Debug)]
pub struct ParseResult {
    pub decls: Vec<Decl>,
    /// Scanner and parser errors ordered by line.
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Parse everything the scanner produces.
pub fn parse(scanner: Scanner<'_>) -> ParseResult {
    Parser::new(scanner).parse_script()
}

/// Parse a source string.
pub fn parse_source(source: &str, mode: LanguageMode) -> ParseResult {
    let buffer = SourceBuffer::new(source);
    parse(Scanner::new(&buffer, mode))
}

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    context: ParseContext,
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    pub fn new(scanner: Scanner<'src>) -> Self {
        Parser {
            cursor: Cursor::new(scanner),
            context: ParseContext::SCRIPT,
            errors: Vec::new(),
        }
    }

    /// Parse declarations until end of input.
    pub fn parse_script(mut self) -> ParseResult {
        let mut decls = Vec::new();
        loop {
            self.skip_newlines();
            if self.cursor.is_at_end() {
                break;
            }
            decls.push(self.declaration());
        }

        let mut errors = self.cursor.take_lex_errors();
        errors.append(&mut self.errors);
        errors.sort_by_key(|error| error.line);
        debug!(decls = decls.len(), errors = errors.len(), "parsed script");
        ParseResult { decls, errors }
    }

    // --- Cursor delegation ---

    #[inline]
    fn current(&self) -> Token<'src> {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn previous(&self) -> Token<'src> {
        self.cursor.previous()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token<'src> {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    /// Consume a token of `kind` or fail with `message` at the current token.
    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token<'src>, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        let code = match kind {
            TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket => ErrorCode::E1003,
            TokenKind::Ident => ErrorCode::E1004,
            _ => ErrorCode::E1001,
        };
        Err(ParseError::at(self.current(), code, message))
    }

    fn expect_ident(&mut self, message: &str) -> Result<Name, ParseError> {
        let token = self.expect(TokenKind::Ident, message)?;
        Ok(Name::from(token.lexeme))
    }

    fn skip_newlines(&mut self) {
        if self.cursor.mode().auto_semicolons {
            self.cursor.skip_newlines();
        }
    }

    /// End a simple statement.
    ///
    /// With automatic semicolons a line break, a closing `}` or the end of
    /// input also ends the statement; the latter two are not consumed.
    fn terminator(&mut self, after: &str) -> Result<(), ParseError> {
        if self.eat(TokenKind::Semicolon) {
            return Ok(());
        }
        if self.cursor.mode().auto_semicolons
            && (self.eat(TokenKind::NewLine)
                || self.check(TokenKind::RBrace)
                || self.cursor.is_at_end())
        {
            return Ok(());
        }
        Err(ParseError::at(
            self.current(),
            ErrorCode::E1010,
            format!("expected ';' after {after}"),
        ))
    }

    /// Record an error that does not abandon the current declaration.
    fn report(&mut self, error: ParseError) {
        debug!(line = error.line, message = %error.message, "parse error");
        self.errors.push(error);
    }

    /// Run `f` with a replaced parse context, restoring the old one after.
    fn with_context<T>(&mut self, context: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.context, context);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Tag errors coming out of `f` with what was being parsed.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|error| error.with_context(context))
    }
}

#[cfg(test)]
mod tests;
