use super::*;

fn plain(text: &str) -> Option<TokenKind> {
    lookup(text, LanguageMode::default())
}

#[test]
fn declaration_keywords() {
    assert_eq!(plain("var"), Some(TokenKind::Var));
    assert_eq!(plain("function"), Some(TokenKind::Function));
}

#[test]
fn value_keywords() {
    assert_eq!(plain("void"), Some(TokenKind::Void));
    assert_eq!(plain("true"), Some(TokenKind::True));
    assert_eq!(plain("false"), Some(TokenKind::False));
}

#[test]
fn control_flow_keywords() {
    assert_eq!(plain("if"), Some(TokenKind::If));
    assert_eq!(plain("else"), Some(TokenKind::Else));
    assert_eq!(plain("for"), Some(TokenKind::For));
    assert_eq!(plain("foreach"), Some(TokenKind::ForEach));
    assert_eq!(plain("while"), Some(TokenKind::While));
    assert_eq!(plain("do"), Some(TokenKind::Do));
    assert_eq!(plain("break"), Some(TokenKind::Break));
    assert_eq!(plain("continue"), Some(TokenKind::Continue));
    assert_eq!(plain("return"), Some(TokenKind::Return));
    assert_eq!(plain("throw"), Some(TokenKind::Throw));
    assert_eq!(plain("try"), Some(TokenKind::Try));
    assert_eq!(plain("catch"), Some(TokenKind::Catch));
    assert_eq!(plain("finally"), Some(TokenKind::Finally));
}

#[test]
fn reserved_keywords() {
    assert_eq!(plain("switch"), Some(TokenKind::Switch));
    assert_eq!(plain("case"), Some(TokenKind::Case));
    assert_eq!(plain("default"), Some(TokenKind::Default));
    assert_eq!(plain("async"), Some(TokenKind::Async));
    assert_eq!(plain("await"), Some(TokenKind::Await));
    assert_eq!(plain("yield"), Some(TokenKind::Yield));
    assert_eq!(plain("typeof"), Some(TokenKind::TypeOf));
    assert_eq!(plain("in"), Some(TokenKind::In));
}

#[test]
fn class_keywords_need_object_oriented_mode() {
    assert_eq!(plain("class"), None);
    assert_eq!(plain("extends"), None);
    let oo = LanguageMode::default().with_object_oriented(true);
    assert_eq!(lookup("class", oo), Some(TokenKind::Class));
    assert_eq!(lookup("extends", oo), Some(TokenKind::Extends));
}

#[test]
fn identifiers_are_not_keywords() {
    assert_eq!(plain("x"), None);
    assert_eq!(plain("nil"), None);
    assert_eq!(plain("Var"), None);
    assert_eq!(plain("functions"), None);
    assert_eq!(plain("print"), None);
}
