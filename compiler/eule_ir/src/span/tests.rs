use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn test_point_span_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(format!("{span:?}"), "7..7");
}
