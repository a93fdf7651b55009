use pretty_assertions::assert_eq;

use crate::{tokenize, LanguageMode, LexErrorKind, Scanner, SourceBuffer};
use eule_ir::TokenKind;

fn kinds_with(source: &str, mode: LanguageMode) -> Vec<TokenKind> {
    let buf = SourceBuffer::new(source);
    tokenize(&buf, mode).iter().map(|t| t.kind).collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    kinds_with(source, LanguageMode::default())
}

// === Symbols ===

#[test]
fn test_longest_match() {
    assert_eq!(
        kinds("a ??= b ?? c ? d"),
        vec![
            TokenKind::Ident,
            TokenKind::QuestionQuestionEq,
            TokenKind::Ident,
            TokenKind::QuestionQuestion,
            TokenKind::Ident,
            TokenKind::Question,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("x ~/= y ~/ z"),
        vec![
            TokenKind::Ident,
            TokenKind::TildeSlashEq,
            TokenKind::Ident,
            TokenKind::TildeSlash,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_symbols_without_spaces() {
    assert_eq!(
        kinds("a<=b==c!=d"),
        vec![
            TokenKind::Ident,
            TokenKind::LtEq,
            TokenKind::Ident,
            TokenKind::EqEq,
            TokenKind::Ident,
            TokenKind::BangEq,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_arrow_only_in_arrow_mode() {
    assert_eq!(
        kinds("=>"),
        vec![TokenKind::Eq, TokenKind::Gt, TokenKind::Eof]
    );
    let mode = LanguageMode::default().with_arrow_functions(true);
    assert_eq!(kinds_with("=>", mode), vec![TokenKind::Arrow, TokenKind::Eof]);
}

// === Identifiers and keywords ===

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        kinds("var _x1 = void;"),
        vec![
            TokenKind::Var,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::Void,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

// === Strings ===

#[test]
fn test_string_lexeme_is_verbatim() {
    let buf = SourceBuffer::new(r#""say \"hi\"" "a\b""#);
    let tokens = tokenize(&buf, LanguageMode::default());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, r#""say \"hi\"""#);
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].lexeme, r#""a\b""#);
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn test_backslash_before_quote_never_closes() {
    // `\\"` is still a backslash followed by a quote.
    let buf = SourceBuffer::new(r#""a\\" + "b""#);
    let tokens = tokenize(&buf, LanguageMode::default());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, r#""a\\" + ""#);
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[2].kind, TokenKind::Error);

    let buf = SourceBuffer::new("\"a\\\nb\"");
    let mut scanner = Scanner::new(&buf, LanguageMode::default());
    assert_eq!(scanner.scan().kind, TokenKind::Error);
    assert_eq!(
        scanner.last_error().map(|e| e.kind),
        Some(LexErrorKind::NewlineInString)
    );
}

#[test]
fn test_string_errors() {
    let buf = SourceBuffer::new("\"open\nx");
    let mut scanner = Scanner::new(&buf, LanguageMode::default());
    let token = scanner.scan();
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(token.lexeme, "line break in string literal");
    assert_eq!(
        scanner.last_error().map(|e| e.kind),
        Some(LexErrorKind::NewlineInString)
    );
    let next = scanner.scan();
    assert_eq!((next.kind, next.line), (TokenKind::Ident, 2));

    let buf = SourceBuffer::new("\"never closed");
    let mut scanner = Scanner::new(&buf, LanguageMode::default());
    assert_eq!(scanner.scan().lexeme, "unterminated string");
    assert_eq!(scanner.scan().kind, TokenKind::Eof);
}

// === Comments and lines ===

#[test]
fn test_comments_are_skipped_and_lines_counted() {
    let buf = SourceBuffer::new("a // one\n/* two\nthree */ b\nc");
    let tokens = tokenize(&buf, LanguageMode::default());
    let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.line)).collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Ident, 1),
            (TokenKind::Ident, 3),
            (TokenKind::Ident, 4),
            (TokenKind::Eof, 4),
        ]
    );
}

#[test]
fn test_unterminated_block_comment() {
    assert_eq!(
        kinds("a /* no end"),
        vec![TokenKind::Ident, TokenKind::Error, TokenKind::Eof]
    );
}

#[test]
fn test_slash_is_still_division() {
    assert_eq!(
        kinds("a / b /= c"),
        vec![
            TokenKind::Ident,
            TokenKind::Slash,
            TokenKind::Ident,
            TokenKind::SlashEq,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unexpected_character() {
    let buf = SourceBuffer::new("a @ é b");
    let tokens = tokenize(&buf, LanguageMode::default());
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Error,
            TokenKind::Error,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].lexeme, "unexpected character");
}

#[test]
fn test_eof_repeats() {
    let buf = SourceBuffer::new("");
    let mut scanner = Scanner::new(&buf, LanguageMode::default());
    assert!(scanner.scan().is_eof());
    assert!(scanner.scan().is_eof());
}

// === Automatic terminators ===

#[test]
fn test_newline_tokens_in_auto_semicolon_mode() {
    let mode = LanguageMode::default().with_auto_semicolons(true);
    assert_eq!(
        kinds_with("a = 1\nb = (2 +\n3)\n", mode),
        vec![
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::Int,
            TokenKind::NewLine,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::LParen,
            TokenKind::Int,
            TokenKind::Plus,
            TokenKind::Int,
            TokenKind::RParen,
            TokenKind::NewLine,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_no_newline_tokens_by_default() {
    assert_eq!(
        kinds("a\nb"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn test_line_comment_ends_line_in_auto_mode() {
    let mode = LanguageMode::default().with_auto_semicolons(true);
    assert_eq!(
        kinds_with("return // done\nx", mode),
        vec![
            TokenKind::Return,
            TokenKind::NewLine,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}
