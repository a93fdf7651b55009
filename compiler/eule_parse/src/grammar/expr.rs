//! Expression parsing by precedence climbing.
//!
//! `parse_precedence(p)` parses a prefix form and then folds infix and
//! postfix operators while their binding level is at least `p`. Binary
//! operators parse their right operand one level higher, which makes them
//! left-associative. Assignment is only accepted when the whole climb was
//! entered at or below [`Precedence::Assign`].

use eule_diagnostic::ErrorCode;
use eule_ir::{BinaryOp, Expr, LogicalOp, Name, Token, TokenKind, UnaryOp, UpdateOp};
use eule_lexer::number_value;
use eule_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

/// Binding levels, lowest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Lowest,
    Assign,
    Or,
    And,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
    Call,
}

impl Precedence {
    /// Binding level of `kind` as an infix or postfix operator.
    ///
    /// Tokens that continue no expression map to `Lowest`, which stops every
    /// climb. `=` is handled by the assignable prefix forms, not here.
    pub(crate) fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::PipePipe | TokenKind::QuestionQuestion => Precedence::Or,
            TokenKind::AmpAmp => Precedence::And,
            TokenKind::EqEq | TokenKind::BangEq => Precedence::Equality,
            TokenKind::Lt | TokenKind::LtEq | TokenKind::Gt | TokenKind::GtEq => {
                Precedence::Comparison
            }
            TokenKind::Plus | TokenKind::Minus => Precedence::Term,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent | TokenKind::TildeSlash => {
                Precedence::Factor
            }
            TokenKind::Dot | TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                Precedence::Call
            }
            _ => Precedence::Lowest,
        }
    }

    /// The next tighter level.
    fn next(self) -> Self {
        match self {
            Precedence::Lowest => Precedence::Assign,
            Precedence::Assign => Precedence::Or,
            Precedence::Or => Precedence::And,
            Precedence::And => Precedence::Equality,
            Precedence::Equality => Precedence::Comparison,
            Precedence::Comparison => Precedence::Term,
            Precedence::Term => Precedence::Factor,
            Precedence::Factor => Precedence::Unary,
            Precedence::Unary | Precedence::Call => Precedence::Call,
        }
    }
}

/// Assignment operator at the current token.
#[derive(Copy, Clone)]
enum AssignOp {
    Plain,
    Compound(BinaryOp),
}

impl AssignOp {
    fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Eq => return Some(AssignOp::Plain),
            TokenKind::PlusEq => BinaryOp::Add,
            TokenKind::MinusEq => BinaryOp::Sub,
            TokenKind::StarEq => BinaryOp::Mul,
            TokenKind::SlashEq => BinaryOp::Div,
            TokenKind::PercentEq => BinaryOp::Mod,
            TokenKind::TildeSlashEq => BinaryOp::FloorDiv,
            _ => return None,
        };
        Some(AssignOp::Compound(op))
    }

    /// Compound assignments the scanner knows but the language has no
    /// operator for.
    fn is_unsupported(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::QuestionQuestionEq
                | TokenKind::PipePipeEq
                | TokenKind::AmpAmpEq
                | TokenKind::PipeEq
                | TokenKind::AmpEq
                | TokenKind::CaretEq
                | TokenKind::TildeEq
                | TokenKind::LtLtEq
                | TokenKind::GtGtEq
        )
    }
}

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::TildeSlash => BinaryOp::FloorDiv,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::BangEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        _ => return None,
    })
}

fn logical_op(kind: TokenKind) -> Option<LogicalOp> {
    Some(match kind {
        TokenKind::AmpAmp => LogicalOp::And,
        TokenKind::PipePipe => LogicalOp::Or,
        TokenKind::QuestionQuestion => LogicalOp::Coalesce,
        _ => return None,
    })
}

impl Parser<'_> {
    /// Parse a full expression, assignment included.
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_precedence(Precedence::Assign)
    }

    pub(crate) fn parse_precedence(&mut self, precedence: Precedence) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_precedence_inner(precedence))
    }

    fn parse_precedence_inner(&mut self, precedence: Precedence) -> Result<Expr, ParseError> {
        let can_assign = precedence <= Precedence::Assign;
        let mut expr = self.prefix(can_assign)?;

        while precedence <= Precedence::of(self.current_kind()) {
            expr = self.infix(expr, can_assign)?;
        }

        let current = self.current();
        if AssignOp::is_unsupported(current.kind) {
            return Err(ParseError::at(
                current,
                ErrorCode::E1005,
                format!("unsupported assignment operator '{}'", current.lexeme),
            ));
        }
        if can_assign && AssignOp::from_token(self.current_kind()).is_some() {
            return Err(ParseError::at(
                self.current(),
                ErrorCode::E1005,
                "Invalid assignment target.",
            ));
        }
        Ok(expr)
    }

    /// Forms that start an expression.
    fn prefix(&mut self, can_assign: bool) -> Result<Expr, ParseError> {
        let token = self.current();
        trace!(token = ?token, "prefix");
        match token.kind {
            TokenKind::Ident => {
                self.advance();
                let target = Expr::Identifier {
                    name: Name::from(token.lexeme),
                    line: token.line,
                };
                self.assignment(target, can_assign)
            }
            TokenKind::Void => {
                self.advance();
                Ok(Expr::Nihil)
            }
            TokenKind::True | TokenKind::False => {
                self.advance();
                Ok(Expr::Bool(token.kind == TokenKind::True))
            }
            TokenKind::Int | TokenKind::Float => {
                self.advance();
                number_literal(token)
            }
            TokenKind::String => {
                self.advance();
                Ok(Expr::String(string_contents(token.lexeme)))
            }
            TokenKind::LParen => {
                self.advance();
                self.skip_newlines();
                let inner = self.expression()?;
                self.skip_newlines();
                self.expect(TokenKind::RParen, "expected ')' after expression")?;
                Ok(inner)
            }
            TokenKind::LBrace => {
                self.advance();
                self.table_literal()
            }
            TokenKind::LBracket => {
                self.advance();
                self.array_literal()
            }
            TokenKind::Function => {
                self.advance();
                self.function_literal()
            }
            TokenKind::Plus | TokenKind::Minus | TokenKind::Bang | TokenKind::TypeOf => {
                self.advance();
                let op = match token.kind {
                    TokenKind::Plus => UnaryOp::Plus,
                    TokenKind::Minus => UnaryOp::Neg,
                    TokenKind::Bang => UnaryOp::Not,
                    _ => UnaryOp::TypeOf,
                };
                let operand = self.parse_precedence(Precedence::Unary)?;
                Ok(Expr::Prefix {
                    op,
                    operand: Box::new(operand),
                    line: token.line,
                })
            }
            TokenKind::PlusPlus | TokenKind::MinusMinus => {
                self.advance();
                let op = if token.kind == TokenKind::PlusPlus {
                    UpdateOp::Increment
                } else {
                    UpdateOp::Decrement
                };
                let target = self.parse_precedence(Precedence::Unary)?;
                if !target.is_assignable() {
                    return Err(ParseError::at(
                        self.previous(),
                        ErrorCode::E1005,
                        format!("Invalid target for '{}'.", op.as_symbol()),
                    ));
                }
                Ok(Expr::Update {
                    op,
                    target: Box::new(target),
                    line: token.line,
                })
            }
            TokenKind::Yield => {
                self.advance();
                if !self.context.allows_yield() {
                    self.report(ParseError::at(
                        token,
                        ErrorCode::E1008,
                        "'yield' outside a generator function",
                    ));
                }
                let operand = if self.yield_has_operand() {
                    self.parse_precedence(Precedence::Unary)?
                } else {
                    Expr::Empty
                };
                Ok(Expr::Prefix {
                    op: UnaryOp::Yield,
                    operand: Box::new(operand),
                    line: token.line,
                })
            }
            _ => Err(ParseError::at(token, ErrorCode::E1002, "expected expression")),
        }
    }

    /// Infix and postfix forms continuing `left`.
    fn infix(&mut self, left: Expr, can_assign: bool) -> Result<Expr, ParseError> {
        let token = self.advance();
        trace!(token = ?token, "infix");
        let line = token.line;

        if let Some(op) = binary_op(token.kind) {
            let right = self.parse_precedence(Precedence::of(token.kind).next())?;
            return Ok(Expr::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
                line,
            });
        }
        if let Some(op) = logical_op(token.kind) {
            let right = self.parse_precedence(Precedence::of(token.kind).next())?;
            return Ok(Expr::Logical {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        match token.kind {
            TokenKind::Dot => {
                let name = self.expect_ident("expected property name after '.'")?;
                let target = Expr::Index {
                    object: Box::new(left),
                    key: Box::new(Expr::String(name)),
                    line,
                };
                self.assignment(target, can_assign)
            }
            TokenKind::LBracket => {
                self.skip_newlines();
                let key = self.expression()?;
                self.skip_newlines();
                self.expect(TokenKind::RBracket, "expected ']' after index")?;
                let target = Expr::Index {
                    object: Box::new(left),
                    key: Box::new(key),
                    line,
                };
                self.assignment(target, can_assign)
            }
            TokenKind::LParen => {
                let args = self.call_arguments()?;
                Ok(Expr::Call {
                    callee: Box::new(left),
                    args,
                    line,
                })
            }
            TokenKind::LBrace => {
                let table = self.table_entries()?;
                Ok(Expr::ProtoTable {
                    proto: Box::new(left),
                    table,
                    line,
                })
            }
            _ => Err(ParseError::at(token, ErrorCode::E1001, "unexpected token")),
        }
    }

    /// Wrap an assignable `target` in an assignment if one follows.
    ///
    /// Assignment is right-associative: the value is a full expression.
    fn assignment(&mut self, target: Expr, can_assign: bool) -> Result<Expr, ParseError> {
        if !can_assign {
            return Ok(target);
        }
        let Some(op) = AssignOp::from_token(self.current_kind()) else {
            return Ok(target);
        };
        let line = self.advance().line;
        let value = Box::new(self.expression()?);
        let target = Box::new(target);
        Ok(match op {
            AssignOp::Plain => Expr::Assign {
                target,
                value,
                line,
            },
            AssignOp::Compound(op) => Expr::CompoundAssign {
                op,
                target,
                value,
                line,
            },
        })
    }

    /// `yield;` and `yield)` have no operand.
    fn yield_has_operand(&self) -> bool {
        !matches!(
            self.current_kind(),
            TokenKind::Semicolon
                | TokenKind::NewLine
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
                | TokenKind::Comma
                | TokenKind::Colon
                | TokenKind::Eof
        )
    }
}

fn number_literal(token: Token<'_>) -> Result<Expr, ParseError> {
    number_value(token.lexeme)
        .map(Expr::Number)
        .ok_or_else(|| ParseError::at(token, ErrorCode::E0003, "invalid number literal"))
}

/// Text between the quotes of a string lexeme, kept verbatim.
fn string_contents(lexeme: &str) -> Name {
    let inner = lexeme
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(lexeme);
    Name::from(inner)
}
