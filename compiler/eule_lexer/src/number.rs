//! Numeric literal scanning and evaluation.
//!
//! Valid: `3`, `3.14`, `1_000`, `3.1_4`, `0x1F`, `0o17`, `0b1010`, `0X1f`.
//! Invalid: `3_`, `1__0`, `3.`, `3._1`, `3.1_`, `3abc`, `0x`, `0b12`.

use eule_ir::{Token, TokenKind};

use crate::scanner::{is_ident_continue, is_ident_start};
use crate::{LexErrorKind, Scanner};

/// Radix selected by the letter after a leading `0`.
fn radix_for_prefix(byte: u8) -> Option<u32> {
    match byte.to_ascii_lowercase() {
        b'x' => Some(16),
        b'o' => Some(8),
        b'b' => Some(2),
        _ => None,
    }
}

#[inline]
fn is_digit(byte: u8, radix: u32) -> bool {
    char::from(byte).is_digit(radix)
}

impl<'src> Scanner<'src> {
    /// Scan a number whose first digit has already been consumed.
    pub(crate) fn number(&mut self, first: u8) -> Token<'src> {
        match self.number_body(first) {
            Ok(kind) => self.make_token(kind),
            Err(error) => {
                // Swallow the rest of the malformed literal so it produces one error.
                self.cursor
                    .eat_while(|b| is_ident_continue(b) || b == b'.');
                self.error_token(error)
            }
        }
    }

    fn number_body(&mut self, first: u8) -> Result<TokenKind, LexErrorKind> {
        if first == b'0' {
            if let Some(radix) = radix_for_prefix(self.cursor.current()) {
                self.cursor.advance();
                if !is_digit(self.cursor.current(), radix) {
                    return Err(LexErrorKind::MissingRadixDigits { radix });
                }
                self.digits(radix, false)?;
                if radix < 10 && self.cursor.current().is_ascii_digit() {
                    return Err(LexErrorKind::InvalidDigitForRadix { radix });
                }
                self.reject_trailing_letter()?;
                return Ok(TokenKind::Int);
            }
        }

        self.digits(10, true)?;
        self.reject_trailing_letter()?;

        if self.cursor.current() != b'.' {
            return Ok(TokenKind::Int);
        }
        self.cursor.advance();
        if self.digits(10, false)? == 0 {
            return Err(LexErrorKind::MissingFractionDigits);
        }
        self.reject_trailing_letter()?;
        Ok(TokenKind::Float)
    }

    /// Consume a digit run with single `_` separators.
    ///
    /// `after_digit` is true when a digit was consumed just before the run,
    /// which allows the run to start with `_`. Returns the digit count.
    fn digits(&mut self, radix: u32, after_digit: bool) -> Result<usize, LexErrorKind> {
        let mut count = 0;
        let mut last_underscore = false;
        loop {
            let byte = self.cursor.current();
            if is_digit(byte, radix) {
                count += 1;
                last_underscore = false;
            } else if byte == b'_' {
                if last_underscore {
                    return Err(LexErrorKind::ConsecutiveUnderscores);
                }
                if count == 0 && !after_digit {
                    return Err(LexErrorKind::LeadingUnderscore);
                }
                last_underscore = true;
            } else {
                break;
            }
            self.cursor.advance();
        }
        if last_underscore {
            return Err(LexErrorKind::TrailingUnderscore);
        }
        Ok(count)
    }

    fn reject_trailing_letter(&self) -> Result<(), LexErrorKind> {
        if is_ident_start(self.cursor.current()) {
            Err(LexErrorKind::LetterAfterNumber)
        } else {
            Ok(())
        }
    }
}

/// Numeric value of an `Int` or `Float` lexeme.
///
/// Prefixed literals are accumulated in `f64` so values beyond `u64` lose
/// precision instead of failing. Returns `None` for text the scanner would
/// not have produced.
pub fn number_value(lexeme: &str) -> Option<f64> {
    let digits: String = lexeme.chars().filter(|&c| c != '_').collect();
    let bytes = digits.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        if let Some(radix) = radix_for_prefix(bytes[1]) {
            return digits[2..].chars().try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix)
                    .map(|d| acc * f64::from(radix) + f64::from(d))
            });
        }
    }
    digits.parse::<f64>().ok()
}
