//! Scanner error types.

use eule_diagnostic::{Diagnostic, ErrorCode};
use eule_ir::Span;

/// A scanner error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub span: Span,
}

impl LexError {
    /// Lower into a diagnostic pointing at the offending source text.
    pub fn to_diagnostic(&self, text: &str) -> Diagnostic {
        Diagnostic::error(self.kind.code())
            .with_message(self.kind.message())
            .at_token(self.line, text)
    }
}

/// What kind of scanner error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === String Errors ===
    /// Missing closing `"` before end of input.
    UnterminatedString,
    /// Line break inside a string literal.
    NewlineInString,

    // === Comment Errors ===
    /// Missing closing `*/`.
    UnterminatedComment,

    // === Numeric Errors ===
    /// Base prefix not followed by a digit of that base (`0x`, `0bz`).
    MissingRadixDigits { radix: u32 },
    /// Decimal digit outside a binary or octal literal (`0b12`).
    InvalidDigitForRadix { radix: u32 },
    /// `.` without fraction digits (`3.`).
    MissingFractionDigits,
    /// `_` not preceded by a digit (`3._1`).
    LeadingUnderscore,
    /// `_` at the end of a digit run (`3_`).
    TrailingUnderscore,
    /// `__` inside a digit run.
    ConsecutiveUnderscores,
    /// Literal immediately followed by a letter (`3abc`).
    LetterAfterNumber,

    // === Character Errors ===
    /// Byte that starts no token.
    UnexpectedCharacter,
}

impl LexErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter => ErrorCode::E0002,
            LexErrorKind::MissingRadixDigits { .. }
            | LexErrorKind::InvalidDigitForRadix { .. }
            | LexErrorKind::MissingFractionDigits
            | LexErrorKind::LeadingUnderscore
            | LexErrorKind::TrailingUnderscore
            | LexErrorKind::ConsecutiveUnderscores
            | LexErrorKind::LetterAfterNumber => ErrorCode::E0003,
            LexErrorKind::UnterminatedComment => ErrorCode::E0004,
            LexErrorKind::NewlineInString => ErrorCode::E0005,
        }
    }

    /// Message carried by the error token.
    pub fn message(self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "unterminated string",
            LexErrorKind::NewlineInString => "line break in string literal",
            LexErrorKind::UnterminatedComment => "unterminated block comment",
            LexErrorKind::MissingRadixDigits { radix: 16 } => "expected hexadecimal digit",
            LexErrorKind::MissingRadixDigits { radix: 8 } => "expected octal digit",
            LexErrorKind::MissingRadixDigits { .. } => "expected binary digit",
            LexErrorKind::InvalidDigitForRadix { radix: 8 } => "invalid digit in octal literal",
            LexErrorKind::InvalidDigitForRadix { .. } => "invalid digit in binary literal",
            LexErrorKind::MissingFractionDigits => "expected digit after '.'",
            LexErrorKind::LeadingUnderscore => "'_' must follow a digit",
            LexErrorKind::TrailingUnderscore => "number cannot end with '_'",
            LexErrorKind::ConsecutiveUnderscores => "consecutive '_' in number",
            LexErrorKind::LetterAfterNumber => "letter directly after number",
            LexErrorKind::UnexpectedCharacter => "unexpected character",
        }
    }
}
