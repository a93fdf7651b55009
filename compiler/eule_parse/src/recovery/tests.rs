use eule_lexer::{LanguageMode, Scanner, SourceBuffer};

use super::*;

#[test]
fn test_token_set_single() {
    let set = TokenSet::single(TokenKind::Var);
    assert!(set.contains(TokenKind::Var));
    assert!(!set.contains(TokenKind::Function));
}

#[test]
fn test_token_set_with() {
    let set = TokenSet::new().with(TokenKind::Var).with(TokenKind::Eof);
    assert!(set.contains(TokenKind::Var));
    assert!(set.contains(TokenKind::Eof));
    assert!(!set.contains(TokenKind::Ident));
}

#[test]
fn test_empty_set_contains_nothing() {
    let set = TokenSet::new();
    assert!(!set.contains(TokenKind::Eof));
    assert!(!set.contains(TokenKind::LParen));
}

#[test]
fn test_boundary_covers_statement_keywords() {
    for kind in [
        TokenKind::Var,
        TokenKind::Function,
        TokenKind::If,
        TokenKind::For,
        TokenKind::ForEach,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::Continue,
        TokenKind::Break,
        TokenKind::Throw,
        TokenKind::Try,
        TokenKind::Return,
        TokenKind::Switch,
        TokenKind::Case,
        TokenKind::Default,
        TokenKind::RBrace,
        TokenKind::Eof,
    ] {
        assert!(STMT_BOUNDARY.contains(kind), "{kind:?} should stop recovery");
    }
    assert!(!STMT_BOUNDARY.contains(TokenKind::Else));
    assert!(!STMT_BOUNDARY.contains(TokenKind::Ident));
}

#[test]
fn test_synchronize_stops_after_semicolon() {
    let source = SourceBuffer::new("a b c; d");
    let mut cursor = Cursor::new(Scanner::new(&source, LanguageMode::default()));
    let skipped = synchronize(&mut cursor, STMT_BOUNDARY);
    assert_eq!(skipped, 4);
    assert_eq!(cursor.current().lexeme, "d");
}

#[test]
fn test_synchronize_stops_at_keyword() {
    let source = SourceBuffer::new("1 + + while (x) {}");
    let mut cursor = Cursor::new(Scanner::new(&source, LanguageMode::default()));
    synchronize(&mut cursor, STMT_BOUNDARY);
    assert_eq!(cursor.current_kind(), TokenKind::While);
}

#[test]
fn test_synchronize_stops_at_closing_brace() {
    let source = SourceBuffer::new("x y } z");
    let mut cursor = Cursor::new(Scanner::new(&source, LanguageMode::default()));
    synchronize(&mut cursor, STMT_BOUNDARY);
    assert_eq!(cursor.current_kind(), TokenKind::RBrace);
}

#[test]
fn test_synchronize_runs_to_end() {
    let source = SourceBuffer::new("a b c");
    let mut cursor = Cursor::new(Scanner::new(&source, LanguageMode::default()));
    assert_eq!(synchronize(&mut cursor, STMT_BOUNDARY), 3);
    assert!(cursor.is_at_end());
}

#[test]
fn test_synchronize_stops_after_line_break_in_auto_mode() {
    let source = SourceBuffer::new("a b\nc");
    let mode = LanguageMode::default().with_auto_semicolons(true);
    let mut cursor = Cursor::new(Scanner::new(&source, mode));
    synchronize(&mut cursor, STMT_BOUNDARY);
    assert_eq!(cursor.current().lexeme, "c");
}
