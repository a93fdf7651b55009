//! Parser tests over whole scripts.

mod statements;

use eule_ir::Decl;
use eule_lexer::LanguageMode;

use crate::{parse_source, ParseResult};

fn parse(source: &str) -> ParseResult {
    parse_source(source, LanguageMode::default())
}

fn parse_with(source: &str, mode: LanguageMode) -> ParseResult {
    parse_source(source, mode)
}

/// Parse and require a clean result.
fn parse_ok(source: &str) -> Vec<Decl> {
    parse_ok_with(source, LanguageMode::default())
}

fn parse_ok_with(source: &str, mode: LanguageMode) -> Vec<Decl> {
    let result = parse_with(source, mode);
    assert!(
        !result.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        result.errors
    );
    result.decls
}
