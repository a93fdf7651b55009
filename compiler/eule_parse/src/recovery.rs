//! Panic-mode error recovery.
//!
//! After a failed declaration the parser discards tokens until it reaches a
//! point where a fresh declaration can plausibly start.

use eule_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds as a bitset over [`TokenKind::index`].
///
/// `TOKEN_KIND_COUNT` is below 128, so one `u128` covers every kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u128 << kind.index())
    }

    /// Add a token kind to this set (builder for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.index())) != 0
    }
}

/// Keywords that open a declaration or statement.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Var)
    .with(TokenKind::Function)
    .with(TokenKind::If)
    .with(TokenKind::For)
    .with(TokenKind::ForEach)
    .with(TokenKind::While)
    .with(TokenKind::Do)
    .with(TokenKind::Continue)
    .with(TokenKind::Break)
    .with(TokenKind::Throw)
    .with(TokenKind::Try)
    .with(TokenKind::Return)
    .with(TokenKind::Switch)
    .with(TokenKind::Case)
    .with(TokenKind::Default);

/// Where recovery stops without consuming: a statement keyword, the end of
/// the enclosing block, or the end of input.
pub const STMT_BOUNDARY: TokenSet = STMT_START
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Tokens that, once consumed, end the broken statement.
pub const STMT_TERMINATOR: TokenSet = TokenSet::single(TokenKind::Semicolon).with(TokenKind::NewLine);

/// Discard tokens until just after a terminator or at a token in `recovery`.
///
/// Returns the number of tokens skipped.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> usize {
    let mut skipped = 0;
    while !cursor.is_at_end() {
        if STMT_TERMINATOR.contains(cursor.previous_kind()) || recovery.contains(cursor.current_kind())
        {
            break;
        }
        cursor.advance();
        skipped += 1;
    }
    skipped
}

#[cfg(test)]
mod tests;
