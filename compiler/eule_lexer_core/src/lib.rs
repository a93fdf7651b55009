//! Low-level source access for the eule scanner.
//!
//! [`SourceBuffer`] copies the source into a zero-padded buffer so the
//! scanner can look up to two bytes ahead without bounds checks, and
//! [`Cursor`] walks that buffer byte by byte. Token classification lives in
//! `eule_lexer`; this crate knows nothing about the language.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
