//! Parse error types.
//!
//! Every syntax error is recorded as a [`ParseError`] and later lowered into a
//! [`Diagnostic`]. Scanner errors reach the parser as error tokens and are
//! recorded through the same type so callers see a single list.

use std::fmt;

use eule_diagnostic::{Diagnostic, ErrorCode};
use eule_ir::{Token, TokenKind};
use eule_lexer::LexError;

/// Longest lexeme quoted in a message before it is shortened.
const MAX_QUOTED_LEXEME: usize = 32;

/// What was being parsed when an error occurred.
///
/// Rendered as a "while parsing ..." note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    VariableDecl,
    FunctionDecl,
    FunctionLiteral,
    Parameters,
    Block,
    IfStatement,
    ForLoop,
    WhileLoop,
    DoWhileLoop,
    TryStatement,
    TableLiteral,
    ArrayLiteral,
    CallArguments,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::VariableDecl => "a variable declaration",
            Self::FunctionDecl => "a function declaration",
            Self::FunctionLiteral => "a function literal",
            Self::Parameters => "function parameters",
            Self::Block => "a block",
            Self::IfStatement => "an if statement",
            Self::ForLoop => "a for loop",
            Self::WhileLoop => "a while loop",
            Self::DoWhileLoop => "a do-while loop",
            Self::TryStatement => "a try statement",
            Self::TableLiteral => "a table literal",
            Self::ArrayLiteral => "an array literal",
            Self::CallArguments => "call arguments",
        }
    }
}

/// A syntax error anchored at a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub line: u32,
    /// Offending source text; `None` when the error is at end of input.
    pub lexeme: Option<String>,
    /// Innermost construct being parsed, if known.
    pub context: Option<ErrorContext>,
}

impl ParseError {
    /// Error at `token`.
    #[cold]
    pub fn at(token: Token<'_>, code: ErrorCode, message: impl Into<String>) -> Self {
        let lexeme = if token.kind == TokenKind::Eof {
            None
        } else {
            Some(shorten(token.lexeme))
        };
        ParseError {
            code,
            message: message.into(),
            line: token.line,
            lexeme,
            context: None,
        }
    }

    /// Record a scanner error; `text` is the source it covers.
    #[cold]
    pub fn from_lex(error: &LexError, text: &str) -> Self {
        ParseError {
            code: error.kind.code(),
            message: error.kind.message().to_owned(),
            line: error.line,
            lexeme: Some(shorten(text)),
            context: None,
        }
    }

    /// Attach a context unless a more specific one is already set.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code).with_message(self.message.clone());
        let diagnostic = match &self.lexeme {
            Some(lexeme) => diagnostic.at_token(self.line, lexeme.clone()),
            None => diagnostic.at_end(self.line),
        };
        match self.context {
            Some(context) => diagnostic.with_note(format!("while parsing {}", context.description())),
            None => diagnostic,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lexeme {
            Some(lexeme) => write!(f, "line {} at '{}': {}", self.line, lexeme, self.message),
            None => write!(f, "line {} at end: {}", self.line, self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Cut long lexemes (an unterminated string swallows the rest of the file)
/// to their first line and a bounded number of characters.
fn shorten(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");
    match first_line.char_indices().nth(MAX_QUOTED_LEXEME) {
        Some((cut, _)) => format!("{}...", &first_line[..cut]),
        None => first_line.to_owned(),
    }
}
