use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2100.as_str(), "E2100");
}

#[test]
fn test_error_code_phases() {
    assert!(ErrorCode::E0003.is_lexer_error());
    assert!(ErrorCode::E1005.is_parser_error());
    assert!(!ErrorCode::E2002.is_lexer_error());
    assert!(!ErrorCode::E2002.is_parser_error());
}
