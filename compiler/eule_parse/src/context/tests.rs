use super::*;

#[test]
fn test_script_context() {
    let ctx = ParseContext::SCRIPT;
    assert_eq!(ctx, ParseContext::default());
    assert!(!ctx.in_function());
    assert!(!ctx.in_loop());
    assert!(!ctx.allows_yield());
}

#[test]
fn test_with_loop() {
    let ctx = ParseContext::SCRIPT.with(ParseContext::IN_LOOP);
    assert!(ctx.in_loop());
    assert!(!ctx.in_function());
}

#[test]
fn test_function_context_drops_loop() {
    // A function body always starts fresh, whatever encloses it.
    let ctx = ParseContext::for_function(FunctionKind::Sync);
    assert!(ctx.in_function());
    assert!(!ctx.in_loop());
    assert!(!ctx.allows_yield());
}

#[test]
fn test_generator_allows_yield() {
    assert!(ParseContext::for_function(FunctionKind::SyncGenerator).allows_yield());
    assert!(ParseContext::for_function(FunctionKind::AsyncGenerator).allows_yield());
    assert!(!ParseContext::for_function(FunctionKind::Async).allows_yield());
}

#[test]
fn test_has_combined_flags() {
    let ctx = ParseContext::IN_FUNCTION.with(ParseContext::IN_LOOP);
    assert!(ctx.has(ParseContext::IN_FUNCTION));
    assert!(ctx.has(ParseContext::IN_LOOP));
    assert!(!ctx.has(ParseContext::ALLOW_YIELD));
}
