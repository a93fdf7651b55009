use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Where in the source a diagnostic points.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
enum Location {
    Unknown,
    Line(u32),
    /// Line plus the offending token text; `None` text means end of input.
    Token { line: u32, lexeme: Option<String> },
}

/// A rich diagnostic with error code, source location and notes.
///
/// Rendered as `error [E1005]: line 3 at '=': Invalid assignment target.`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    pub severity: Severity,
    /// Main error message.
    pub message: String,
    location: Location,
    /// Additional notes providing context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            location: Location::Unknown,
            notes: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Set the main message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point at a source line without a specific token.
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.location = Location::Line(line);
        self
    }

    /// Point at a token on `line`.
    #[must_use]
    pub fn at_token(mut self, line: u32, lexeme: impl Into<String>) -> Self {
        self.location = Location::Token {
            line,
            lexeme: Some(lexeme.into()),
        };
        self
    }

    /// Point at the end of input on `line`.
    #[must_use]
    pub fn at_end(mut self, line: u32) -> Self {
        self.location = Location::Token { line, lexeme: None };
        self
    }

    /// Add a note providing additional context.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Source line this diagnostic points at, if known.
    pub fn line(&self) -> Option<u32> {
        match self.location {
            Location::Unknown => None,
            Location::Line(line) | Location::Token { line, .. } => Some(line),
        }
    }

    /// Check if this is an error (not a warning).
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: ", self.severity, self.code)?;

        match &self.location {
            Location::Unknown => {}
            Location::Line(line) => write!(f, "line {line}: ")?,
            Location::Token {
                line,
                lexeme: Some(lexeme),
            } => write!(f, "line {line} at '{lexeme}': ")?,
            Location::Token { line, lexeme: None } => write!(f, "line {line} at end: ")?,
        }
        write!(f, "{}", self.message)?;

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}
