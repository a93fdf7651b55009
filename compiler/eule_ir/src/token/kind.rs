//! Token kinds for eule.

use std::fmt;

/// Number of [`TokenKind`] variants. Used for bitset sizing.
pub const TOKEN_KIND_COUNT: usize = 90;

/// Every token the scanner can produce.
///
/// Fieldless so it is `Copy` and fits in a byte; the payload of a literal
/// lives in the token's lexeme. The discriminant doubles as a bit index for
/// token sets in the parser.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Single-byte symbols
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
    Bang,
    Dot,
    Question,
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Pipe,
    Amp,
    Caret,
    Tilde,
    Lt,
    Gt,

    // Two-byte symbols
    LtLt,
    GtGt,
    QuestionDot,
    QuestionBracket,
    TildeSlash,
    PipePipe,
    AmpAmp,
    QuestionQuestion,
    PlusPlus,
    MinusMinus,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    PipeEq,
    AmpEq,
    CaretEq,
    TildeEq,
    BangEq,
    EqEq,
    LtEq,
    GtEq,
    /// `=>`, only scanned when arrow functions are enabled.
    Arrow,

    // Three-byte symbols
    DotDotDot,
    TildeSlashEq,
    LtLtEq,
    GtGtEq,
    PipePipeEq,
    AmpAmpEq,
    QuestionQuestionEq,

    // Literals
    Ident,
    String,
    Int,
    Float,

    // Keywords
    Var,
    Function,
    /// `void`, the nihil literal.
    Void,
    True,
    False,
    If,
    Else,
    For,
    ForEach,
    In,
    While,
    Do,
    Continue,
    Break,
    Throw,
    Try,
    Catch,
    Finally,
    Return,
    Yield,
    Switch,
    Case,
    Default,
    Class,
    Extends,
    Async,
    Await,
    TypeOf,

    /// Implicit statement terminator (auto-semicolon mode only).
    NewLine,
    Error,
    Eof,
}

impl TokenKind {
    /// Bit index for token sets.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Human-readable name for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Bang => "!",
            TokenKind::Dot => ".",
            TokenKind::Question => "?",
            TokenKind::Eq => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Pipe => "|",
            TokenKind::Amp => "&",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtLt => "<<",
            TokenKind::GtGt => ">>",
            TokenKind::QuestionDot => "?.",
            TokenKind::QuestionBracket => "?[",
            TokenKind::TildeSlash => "~/",
            TokenKind::PipePipe => "||",
            TokenKind::AmpAmp => "&&",
            TokenKind::QuestionQuestion => "??",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::PercentEq => "%=",
            TokenKind::PipeEq => "|=",
            TokenKind::AmpEq => "&=",
            TokenKind::CaretEq => "^=",
            TokenKind::TildeEq => "~=",
            TokenKind::BangEq => "!=",
            TokenKind::EqEq => "==",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Arrow => "=>",
            TokenKind::DotDotDot => "...",
            TokenKind::TildeSlashEq => "~/=",
            TokenKind::LtLtEq => "<<=",
            TokenKind::GtGtEq => ">>=",
            TokenKind::PipePipeEq => "||=",
            TokenKind::AmpAmpEq => "&&=",
            TokenKind::QuestionQuestionEq => "??=",
            TokenKind::Ident => "identifier",
            TokenKind::String => "string",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::Var => "var",
            TokenKind::Function => "function",
            TokenKind::Void => "void",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::ForEach => "foreach",
            TokenKind::In => "in",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Continue => "continue",
            TokenKind::Break => "break",
            TokenKind::Throw => "throw",
            TokenKind::Try => "try",
            TokenKind::Catch => "catch",
            TokenKind::Finally => "finally",
            TokenKind::Return => "return",
            TokenKind::Yield => "yield",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::Class => "class",
            TokenKind::Extends => "extends",
            TokenKind::Async => "async",
            TokenKind::Await => "await",
            TokenKind::TypeOf => "typeof",
            TokenKind::NewLine => "new line",
            TokenKind::Error => "error",
            TokenKind::Eof => "end of input",
        }
    }

    /// Tokens after which a line break becomes an implicit terminator.
    pub fn ends_statement_line(self) -> bool {
        matches!(
            self,
            TokenKind::RParen
                | TokenKind::RBrace
                | TokenKind::RBracket
                | TokenKind::Ident
                | TokenKind::String
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Void
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Return
                | TokenKind::Yield
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
