//! Tokens produced by the scanner.
//!
//! A token borrows its lexeme from the source buffer. Error tokens carry
//! their diagnostic message in `lexeme` instead, so a token is always
//! self-describing without a side channel back to the scanner.

mod kind;

pub use kind::{TokenKind, TOKEN_KIND_COUNT};

use std::fmt;

use super::Span;

/// A token with its line, byte span and source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// 1-based line the token ends on.
    pub line: u32,
    pub span: Span,
    /// Source text, or the message for [`TokenKind::Error`].
    pub lexeme: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, line: u32, span: Span, lexeme: &'src str) -> Self {
        Token {
            kind,
            line,
            span,
            lexeme,
        }
    }

    /// Token used before the first `scan()` call.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            line: 0,
            span: Span::DUMMY,
            lexeme: "",
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}:{}", self.kind, self.lexeme, self.line, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // kind (1) + line (4) + span (8) + &str (16), padded
    crate::static_assert_size!(Token<'static>, 32);
    crate::static_assert_size!(TokenKind, 1);
}
