//! Fatal evaluation errors.
//!
//! An [`EvalError`] aborts the whole run: script `try` blocks never see
//! it. Script-level exceptions travel as values instead (see
//! `completion`). Construct errors through the factory functions below so
//! the kind and the message always agree.

use std::fmt;

use eule_diagnostic::{Diagnostic, ErrorCode};

/// Result of an operation that can only fail fatally.
pub type EvalResult<T> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Type/Operator
    /// Operand kinds do not fit the operator.
    TypeMismatch { operation: String, got: String },

    // Access
    UndefinedVariable { name: String },
    UndefinedAssignment { name: String },
    NotCallable { type_name: String },
    InvalidIndex { reason: String },

    // Resources
    StackOverflow { limit: usize },

    // Language surface without runtime semantics
    Unsupported { construct: String },
    /// `break`/`continue` reached a function boundary.
    EscapedJump { keyword: &'static str },

    /// A script exception nobody caught.
    UncaughtThrow { value: String },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::TypeMismatch { .. } => ErrorCode::E2001,
            Self::UndefinedVariable { .. } => ErrorCode::E2002,
            Self::UndefinedAssignment { .. } => ErrorCode::E2003,
            Self::NotCallable { .. } => ErrorCode::E2004,
            Self::InvalidIndex { .. } => ErrorCode::E2005,
            Self::StackOverflow { .. } => ErrorCode::E2006,
            Self::Unsupported { .. } => ErrorCode::E2007,
            Self::EscapedJump { .. } => ErrorCode::E2008,
            Self::UncaughtThrow { .. } => ErrorCode::E2100,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { operation, got } => write!(f, "{operation} not defined for {got}"),
            Self::UndefinedVariable { name } => write!(f, "undefined variable '{name}'"),
            Self::UndefinedAssignment { name } => {
                write!(f, "assignment to undeclared variable '{name}'")
            }
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::InvalidIndex { reason } => write!(f, "invalid index: {reason}"),
            Self::StackOverflow { limit } => {
                write!(f, "maximum call depth exceeded (limit: {limit})")
            }
            Self::Unsupported { construct } => write!(f, "{construct} is not supported"),
            Self::EscapedJump { keyword } => write!(f, "'{keyword}' outside of a loop"),
            Self::UncaughtThrow { value } => write!(f, "uncaught exception: {value}"),
        }
    }
}

/// A fatal evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
    /// Line of the node that failed, when known.
    pub line: Option<u32>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            line: None,
        }
    }

    /// Attach a line unless one is already known.
    ///
    /// Errors are tagged on the way out, so the innermost node wins.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line.get_or_insert(line);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.message.clone());
        match self.line {
            Some(line) => diagnostic.with_line(line),
            None => diagnostic,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for EvalError {}

// Factories

#[cold]
pub fn type_mismatch(operation: impl Into<String>, got: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        operation: operation.into(),
        got: got.into(),
    })
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_owned(),
    })
}

#[cold]
pub fn undefined_assignment(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedAssignment {
        name: name.to_owned(),
    })
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_owned(),
    })
}

#[cold]
pub fn invalid_index(reason: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidIndex {
        reason: reason.into(),
    })
}

#[cold]
pub fn stack_overflow(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { limit })
}

#[cold]
pub fn unsupported(construct: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Unsupported {
        construct: construct.into(),
    })
}

#[cold]
pub fn escaped_jump(keyword: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EscapedJump { keyword })
}

#[cold]
pub fn uncaught_throw(value: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UncaughtThrow {
        value: value.into(),
    })
}
