//! The lazy scanner.

use eule_ir::{Span, Token, TokenKind};
use eule_lexer_core::{Cursor, SourceBuffer};
use tracing::trace;

use crate::{keywords, symbols, LanguageMode, LexError, LexErrorKind};

/// Produces one token per [`scan`](Scanner::scan) call.
///
/// Once the input is exhausted every further call returns `Eof`.
pub struct Scanner<'src> {
    pub(crate) cursor: Cursor<'src>,
    mode: LanguageMode,
    /// 1-based current line.
    line: u32,
    /// Byte offset where the token being scanned starts.
    start: u32,
    /// Last token may end a statement, so a line break after it is a terminator.
    pending_newline: bool,
    last_error: Option<LexError>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src SourceBuffer, mode: LanguageMode) -> Self {
        Scanner {
            cursor: source.cursor(),
            mode,
            line: 1,
            start: 0,
            pending_newline: false,
            last_error: None,
        }
    }

    pub fn mode(&self) -> LanguageMode {
        self.mode
    }

    /// Current line (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Source text covered by `span`.
    pub fn text(&self, span: Span) -> &'src str {
        self.cursor.slice(span.start, span.end)
    }

    /// The error behind the most recent `Error` token.
    pub fn last_error(&self) -> Option<&LexError> {
        self.last_error.as_ref()
    }

    /// Scan the next token.
    pub fn scan(&mut self) -> Token<'src> {
        let line_before = self.line;
        loop {
            self.skip_whitespace();
            self.start = self.cursor.pos();

            if self.mode.auto_semicolons && self.pending_newline && line_before < self.line {
                self.pending_newline = false;
                return Token::new(
                    TokenKind::NewLine,
                    line_before,
                    Span::point(self.start),
                    "\\n",
                );
            }

            if self.cursor.is_eof() {
                return self.make_token(TokenKind::Eof);
            }

            let byte = self.cursor.current();
            if byte == b'/' && self.cursor.peek() == b'/' {
                self.cursor.eat_until_newline_or_eof();
                continue;
            }
            if byte == b'/' && self.cursor.peek() == b'*' {
                self.cursor.advance_n(2);
                match self.cursor.skip_block_comment() {
                    Ok(lines) => {
                        self.line += lines;
                        continue;
                    }
                    Err(lines) => {
                        self.line += lines;
                        return self.error_token(LexErrorKind::UnterminatedComment);
                    }
                }
            }

            return self.scan_token(byte);
        }
    }

    fn scan_token(&mut self, byte: u8) -> Token<'src> {
        self.cursor.advance();

        if is_ident_start(byte) {
            return self.identifier();
        }
        if byte.is_ascii_digit() {
            return self.number(byte);
        }
        if byte == b'"' {
            return self.string();
        }

        let (next, after) = (self.cursor.current(), self.cursor.peek());
        if let Some(kind) = symbols::triple(byte, next, after) {
            self.cursor.advance_n(2);
            return self.make_token(kind);
        }
        if let Some(kind) = symbols::dual(byte, next, self.mode) {
            self.cursor.advance();
            return self.make_token(kind);
        }
        if let Some(kind) = symbols::mono(byte) {
            return self.make_token(kind);
        }

        // Skip the rest of a multi-byte character so the next token starts
        // on a character boundary.
        let width = Cursor::utf8_char_width(byte);
        self.cursor.advance_n(width - 1);
        self.error_token(LexErrorKind::UnexpectedCharacter)
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current() {
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                b' ' | b'\r' | b'\t' => self.cursor.advance(),
                _ => return,
            }
        }
    }

    fn identifier(&mut self) -> Token<'src> {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.start);
        let kind = keywords::lookup(text, self.mode).unwrap_or(TokenKind::Ident);
        self.make_token(kind)
    }

    fn string(&mut self) -> Token<'src> {
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return self.make_token(TokenKind::String);
                }
                b'\\' => {
                    // A quote right after a backslash never ends the literal; the
                    // text is kept verbatim.
                    self.cursor.advance();
                    if self.cursor.current() == b'"' {
                        self.cursor.advance();
                    }
                }
                b'\n' => return self.error_token(LexErrorKind::NewlineInString),
                _ => return self.error_token(LexErrorKind::UnterminatedString),
            }
        }
    }

    pub(crate) fn make_token(&mut self, kind: TokenKind) -> Token<'src> {
        self.pending_newline = kind.ends_statement_line();
        let end = self.cursor.pos();
        let token = Token::new(
            kind,
            self.line,
            Span::new(self.start, end),
            self.cursor.slice(self.start, end),
        );
        trace!(kind = ?token.kind, line = token.line, lexeme = token.lexeme, "token");
        token
    }

    pub(crate) fn error_token(&mut self, kind: LexErrorKind) -> Token<'src> {
        let span = Span::new(self.start, self.cursor.pos());
        trace!(line = self.line, ?kind, "scan error");
        self.last_error = Some(LexError {
            kind,
            line: self.line,
            span,
        });
        Token::new(TokenKind::Error, self.line, span, kind.message())
    }
}

#[inline]
pub(crate) fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

#[inline]
pub(crate) fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
mod tests;
