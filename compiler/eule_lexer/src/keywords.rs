//! Keyword resolution.
//!
//! The lookup uses the identifier's length as a first-pass filter
//! (keywords range from 2-8 chars), then matches against the keywords of
//! that length. `class` and `extends` are only reserved in object-oriented
//! mode; otherwise they scan as plain identifiers.

use eule_ir::TokenKind;

use crate::LanguageMode;

/// Look up a keyword by text.
///
/// Returns `None` for regular identifiers.
#[inline]
pub(crate) fn lookup(text: &str, mode: LanguageMode) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=8).contains(&len) {
        return None;
    }

    match len {
        2 => match text {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "try" => Some(TokenKind::Try),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "case" => Some(TokenKind::Case),
            "else" => Some(TokenKind::Else),
            "true" => Some(TokenKind::True),
            "void" => Some(TokenKind::Void),
            _ => None,
        },
        5 => match text {
            "async" => Some(TokenKind::Async),
            "await" => Some(TokenKind::Await),
            "break" => Some(TokenKind::Break),
            "catch" => Some(TokenKind::Catch),
            "false" => Some(TokenKind::False),
            "throw" => Some(TokenKind::Throw),
            "while" => Some(TokenKind::While),
            "yield" => Some(TokenKind::Yield),
            "class" if mode.object_oriented => Some(TokenKind::Class),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            "switch" => Some(TokenKind::Switch),
            "typeof" => Some(TokenKind::TypeOf),
            _ => None,
        },
        7 => match text {
            "default" => Some(TokenKind::Default),
            "finally" => Some(TokenKind::Finally),
            "foreach" => Some(TokenKind::ForEach),
            "extends" if mode.object_oriented => Some(TokenKind::Extends),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            "function" => Some(TokenKind::Function),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
