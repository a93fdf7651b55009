use super::*;

#[test]
fn test_triple_table() {
    assert_eq!(triple(b'?', b'?', b'='), Some(TokenKind::QuestionQuestionEq));
    assert_eq!(triple(b'.', b'.', b'.'), Some(TokenKind::DotDotDot));
    assert_eq!(triple(b'?', b'?', b'x'), None);
}

#[test]
fn test_dual_table() {
    let mode = LanguageMode::default();
    assert_eq!(dual(b'=', b'=', mode), Some(TokenKind::EqEq));
    assert_eq!(dual(b'~', b'/', mode), Some(TokenKind::TildeSlash));
    assert_eq!(dual(b'+', b'+', mode), Some(TokenKind::PlusPlus));
    assert_eq!(dual(b'=', b'+', mode), None);
}

#[test]
fn test_arrow_is_mode_gated() {
    let off = LanguageMode::default();
    let on = off.with_arrow_functions(true);
    assert_eq!(dual(b'=', b'>', off), None);
    assert_eq!(dual(b'=', b'>', on), Some(TokenKind::Arrow));
}

#[test]
fn test_mono_table() {
    assert_eq!(mono(b'('), Some(TokenKind::LParen));
    assert_eq!(mono(b'~'), Some(TokenKind::Tilde));
    assert_eq!(mono(b'@'), None);
    assert_eq!(mono(b'"'), None);
}
