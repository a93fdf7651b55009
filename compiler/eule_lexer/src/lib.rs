//! Scanner for eule.
//!
//! Turns a [`SourceBuffer`] into tokens one `scan()` call at a time. The
//! stream is never materialized by the parser; [`tokenize`] exists for
//! tooling and tests.
//!
//! # Token Recognition
//!
//! - Whitespace and both comment forms are skipped, counting line breaks.
//! - Symbols use longest match: the 3-byte table is tried before the 2-byte
//!   table, which is tried before the 1-byte table (`??=` never splits into
//!   `??` `=`).
//! - Identifiers are checked against a keyword table gated by [`LanguageMode`].
//! - Malformed input yields a [`TokenKind::Error`](eule_ir::TokenKind::Error)
//!   token whose lexeme is the message; scanning continues after it.

mod keywords;
mod lex_error;
mod mode;
mod number;
mod scanner;
mod symbols;

pub use eule_lexer_core::SourceBuffer;
pub use lex_error::{LexError, LexErrorKind};
pub use mode::LanguageMode;
pub use number::number_value;
pub use scanner::Scanner;

use eule_ir::{Token, TokenKind};

/// Scan a whole buffer, including the final `Eof` token.
pub fn tokenize(source: &SourceBuffer, mode: LanguageMode) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(source, mode);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
