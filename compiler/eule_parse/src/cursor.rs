//! Token cursor over the lazy scanner.
//!
//! The parser only ever looks at the current and the previous token, so the
//! cursor pulls one token at a time from the [`Scanner`] instead of
//! materializing the stream.

use eule_ir::{Token, TokenKind};
use eule_lexer::{LanguageMode, Scanner};
use tracing::debug;

use crate::ParseError;

pub struct Cursor<'src> {
    scanner: Scanner<'src>,
    current: Token<'src>,
    previous: Token<'src>,
    /// Scanner errors seen so far, in source order.
    lex_errors: Vec<ParseError>,
    /// Tokens consumed; lets callers detect lack of progress.
    consumed: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned on the first token.
    pub fn new(scanner: Scanner<'src>) -> Self {
        let mut cursor = Cursor {
            scanner,
            current: Token::dummy(TokenKind::Eof),
            previous: Token::dummy(TokenKind::Eof),
            lex_errors: Vec::new(),
            consumed: 0,
        };
        cursor.pull();
        cursor
    }

    pub fn mode(&self) -> LanguageMode {
        self.scanner.mode()
    }

    #[inline]
    pub fn current(&self) -> Token<'src> {
        self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn previous(&self) -> Token<'src> {
        self.previous
    }

    #[inline]
    pub fn previous_kind(&self) -> TokenKind {
        self.previous.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Move to the next token, returning the one just consumed.
    pub fn advance(&mut self) -> Token<'src> {
        self.previous = self.current;
        self.consumed += 1;
        self.pull();
        self.previous
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip line-break tokens produced in auto-semicolon mode.
    pub fn skip_newlines(&mut self) {
        while self.check(TokenKind::NewLine) {
            self.advance();
        }
    }

    /// Take the scanner errors collected so far.
    pub fn take_lex_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.lex_errors)
    }

    /// Fetch the next non-error token into `current`.
    ///
    /// Scanner error tokens are converted into diagnostics and skipped.
    fn pull(&mut self) {
        loop {
            let token = self.scanner.scan();
            if token.kind != TokenKind::Error {
                self.current = token;
                return;
            }
            if let Some(error) = self.scanner.last_error() {
                let text = self.scanner.text(error.span);
                debug!(line = error.line, message = token.lexeme, "scanner error");
                self.lex_errors.push(ParseError::from_lex(error, text));
            }
        }
    }
}
