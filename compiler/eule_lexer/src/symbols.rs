//! Symbol tables for longest-match recognition.
//!
//! The scanner consults [`triple`], then [`dual`], then [`mono`] at the
//! current position and takes the first hit.

use eule_ir::TokenKind;

use crate::LanguageMode;

/// Three-byte symbols.
pub(crate) fn triple(a: u8, b: u8, c: u8) -> Option<TokenKind> {
    Some(match (a, b, c) {
        (b'.', b'.', b'.') => TokenKind::DotDotDot,
        (b'~', b'/', b'=') => TokenKind::TildeSlashEq,
        (b'<', b'<', b'=') => TokenKind::LtLtEq,
        (b'>', b'>', b'=') => TokenKind::GtGtEq,
        (b'|', b'|', b'=') => TokenKind::PipePipeEq,
        (b'&', b'&', b'=') => TokenKind::AmpAmpEq,
        (b'?', b'?', b'=') => TokenKind::QuestionQuestionEq,
        _ => return None,
    })
}

/// Two-byte symbols. `=>` only exists with arrow functions enabled.
pub(crate) fn dual(a: u8, b: u8, mode: LanguageMode) -> Option<TokenKind> {
    Some(match (a, b) {
        (b'<', b'<') => TokenKind::LtLt,
        (b'>', b'>') => TokenKind::GtGt,
        (b'?', b'.') => TokenKind::QuestionDot,
        (b'?', b'[') => TokenKind::QuestionBracket,
        (b'~', b'/') => TokenKind::TildeSlash,
        (b'|', b'|') => TokenKind::PipePipe,
        (b'&', b'&') => TokenKind::AmpAmp,
        (b'?', b'?') => TokenKind::QuestionQuestion,
        (b'+', b'+') => TokenKind::PlusPlus,
        (b'-', b'-') => TokenKind::MinusMinus,
        (b'+', b'=') => TokenKind::PlusEq,
        (b'-', b'=') => TokenKind::MinusEq,
        (b'*', b'=') => TokenKind::StarEq,
        (b'/', b'=') => TokenKind::SlashEq,
        (b'%', b'=') => TokenKind::PercentEq,
        (b'|', b'=') => TokenKind::PipeEq,
        (b'&', b'=') => TokenKind::AmpEq,
        (b'^', b'=') => TokenKind::CaretEq,
        (b'~', b'=') => TokenKind::TildeEq,
        (b'!', b'=') => TokenKind::BangEq,
        (b'=', b'=') => TokenKind::EqEq,
        (b'<', b'=') => TokenKind::LtEq,
        (b'>', b'=') => TokenKind::GtEq,
        (b'=', b'>') if mode.arrow_functions => TokenKind::Arrow,
        _ => return None,
    })
}

/// Single-byte symbols.
pub(crate) fn mono(a: u8) -> Option<TokenKind> {
    Some(match a {
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b'{' => TokenKind::LBrace,
        b'}' => TokenKind::RBrace,
        b'[' => TokenKind::LBracket,
        b']' => TokenKind::RBracket,
        b';' => TokenKind::Semicolon,
        b':' => TokenKind::Colon,
        b',' => TokenKind::Comma,
        b'!' => TokenKind::Bang,
        b'.' => TokenKind::Dot,
        b'?' => TokenKind::Question,
        b'=' => TokenKind::Eq,
        b'+' => TokenKind::Plus,
        b'-' => TokenKind::Minus,
        b'*' => TokenKind::Star,
        b'/' => TokenKind::Slash,
        b'%' => TokenKind::Percent,
        b'|' => TokenKind::Pipe,
        b'&' => TokenKind::Amp,
        b'^' => TokenKind::Caret,
        b'~' => TokenKind::Tilde,
        b'<' => TokenKind::Lt,
        b'>' => TokenKind::Gt,
        _ => return None,
    })
}

#[cfg(test)]
mod tests;
