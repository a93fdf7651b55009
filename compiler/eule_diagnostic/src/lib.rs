//! Diagnostic system shared by every interpreter stage.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Source line and offending lexeme (where it went wrong)
//! - Notes (extra context)
//!
//! Scanner, parser and evaluator errors are all lowered into a
//! [`Diagnostic`] before they reach the host.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
