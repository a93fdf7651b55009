use super::*;

/// Mimics a nested expression tree: `-(-(-(... 0)))`.
enum Node {
    Leaf(i64),
    Neg(Box<Node>),
}

fn build(depth: usize) -> Node {
    let mut node = Node::Leaf(1);
    for _ in 0..depth {
        node = Node::Neg(Box::new(node));
    }
    node
}

fn eval(node: &Node) -> i64 {
    ensure_sufficient_stack(|| match node {
        Node::Leaf(v) => *v,
        Node::Neg(inner) => -eval(inner),
    })
}

fn drop_iteratively(mut node: Node) {
    while let Node::Neg(inner) = node {
        node = *inner;
    }
}

#[test]
fn test_shallow_nesting() {
    let tree = build(3);
    assert_eq!(eval(&tree), -1);
    drop_iteratively(tree);
}

#[test]
fn test_deep_nesting() {
    let tree = build(200_000);
    assert_eq!(eval(&tree), 1);
    drop_iteratively(tree);
}

#[test]
fn test_passes_results_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("fault"));
    assert_eq!(result, Err("fault"));
}
