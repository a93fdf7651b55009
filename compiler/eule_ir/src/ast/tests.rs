use super::*;

fn ident(name: &str) -> Expr {
    Expr::Identifier {
        name: name.into(),
        line: 1,
    }
}

#[test]
fn test_assignable_targets() {
    assert!(ident("a").is_assignable());
    let index = Expr::Index {
        object: Box::new(ident("t")),
        key: Box::new(Expr::String("k".into())),
        line: 1,
    };
    assert!(index.is_assignable());
    assert!(!Expr::Number(1.0).is_assignable());
    let call = Expr::Call {
        callee: Box::new(ident("f")),
        args: vec![],
        line: 1,
    };
    assert!(!call.is_assignable());
}

#[test]
fn test_operator_symbols() {
    assert_eq!(BinaryOp::FloorDiv.as_symbol(), "~/");
    assert_eq!(LogicalOp::Coalesce.as_symbol(), "??");
    assert_eq!(UnaryOp::TypeOf.as_symbol(), "typeof");
    assert_eq!(UpdateOp::Decrement.as_symbol(), "--");
    assert_eq!(UpdateOp::Increment.binary(), BinaryOp::Add);
    assert!(BinaryOp::LtEq.is_comparison());
    assert!(!BinaryOp::Mod.is_comparison());
}

#[test]
fn test_function_kind_from_flags() {
    assert_eq!(FunctionKind::new(false, false), FunctionKind::Sync);
    assert_eq!(FunctionKind::new(true, true), FunctionKind::AsyncGenerator);
    assert!(FunctionKind::SyncGenerator.is_generator());
    assert!(!FunctionKind::Async.is_generator());
}

#[test]
fn test_var_binding_keeps_initializer() {
    let binding = VarBinding::new("x".into(), Expr::Nihil);
    assert_eq!(binding.init, Expr::Nihil);
    assert_eq!(&*binding.name, "x");
}
