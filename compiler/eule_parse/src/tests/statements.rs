use std::rc::Rc;

use eule_ir::{Decl, Expr, FunctionKind, FunctionLit, Name, Stmt, TableEntry, VarBinding};
use eule_lexer::LanguageMode;
use pretty_assertions::assert_eq;

use super::{parse_ok, parse_ok_with};

fn ident(name: &str, line: u32) -> Expr {
    Expr::Identifier {
        name: Name::from(name),
        line,
    }
}

fn key(name: &str) -> Expr {
    Expr::String(Name::from(name))
}

#[test]
fn test_var_declaration() {
    assert_eq!(
        parse_ok("var a = 1, b;"),
        vec![Decl::Variable(vec![
            VarBinding::new(Name::from("a"), Expr::Number(1.0)),
            VarBinding::new(Name::from("b"), Expr::Nihil),
        ])]
    );
}

#[test]
fn test_function_declaration() {
    let decls = parse_ok("function add(a, b) { return a + b; }");
    let [Decl::Function { name, function }] = decls.as_slice() else {
        panic!("expected a function declaration, got {decls:?}");
    };
    assert_eq!(&**name, "add");
    assert_eq!(function.params, vec![Name::from("a"), Name::from("b")]);
    assert_eq!(function.kind, FunctionKind::Sync);
    assert_eq!(function.body.len(), 1);
}

#[test]
fn test_generator_and_async_kinds() {
    let decls = parse_ok("function *gen() { yield 1; } async function task() {} async function *both() {}");
    let kinds: Vec<FunctionKind> = decls
        .iter()
        .map(|decl| match decl {
            Decl::Function { function, .. } => function.kind,
            other => panic!("expected a function, got {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            FunctionKind::SyncGenerator,
            FunctionKind::Async,
            FunctionKind::AsyncGenerator
        ]
    );
}

#[test]
fn test_if_else() {
    assert_eq!(
        parse_ok("if (a) b; else c;"),
        vec![Decl::Stmt(Stmt::If {
            init: None,
            cond: ident("a", 1),
            then_branch: Box::new(Stmt::Expr(ident("b", 1))),
            else_branch: Some(Box::new(Stmt::Expr(ident("c", 1)))),
        })]
    );
}

#[test]
fn test_if_with_var_initializer() {
    assert_eq!(
        parse_ok("if (var x = f(); x) {}"),
        vec![Decl::Stmt(Stmt::If {
            init: Some(Box::new(Decl::Variable(vec![VarBinding::new(
                Name::from("x"),
                Expr::Call {
                    callee: Box::new(ident("f", 1)),
                    args: vec![],
                    line: 1,
                },
            )]))),
            cond: ident("x", 1),
            then_branch: Box::new(Stmt::Block(vec![])),
            else_branch: None,
        })]
    );
}

#[test]
fn test_if_with_expression_initializer() {
    let decls = parse_ok("if (n = 2; n) {}");
    let [Decl::Stmt(Stmt::If { init: Some(init), .. })] = decls.as_slice() else {
        panic!("expected if with initializer, got {decls:?}");
    };
    assert!(matches!(**init, Decl::Stmt(Stmt::Expr(Expr::Assign { .. }))));
}

#[test]
fn test_for_with_empty_clauses() {
    assert_eq!(
        parse_ok("for (;;) break;"),
        vec![Decl::Stmt(Stmt::For {
            init: None,
            cond: Expr::Empty,
            post: Expr::Empty,
            body: Box::new(Stmt::Break { line: 1 }),
        })]
    );
}

#[test]
fn test_for_full() {
    let decls = parse_ok("for (var i = 0; i < 3; i = i + 1) { continue; }");
    let [Decl::Stmt(Stmt::For { init, cond, post, body })] = decls.as_slice() else {
        panic!("expected a for loop, got {decls:?}");
    };
    assert!(matches!(init.as_deref(), Some(Decl::Variable(_))));
    assert!(matches!(cond, Expr::Infix { .. }));
    assert!(matches!(post, Expr::Assign { .. }));
    assert_eq!(**body, Stmt::Block(vec![Decl::Stmt(Stmt::Continue { line: 1 })]));
}

#[test]
fn test_while_and_do_while() {
    assert_eq!(
        parse_ok("while (a) {} do {} while (b) do ; while (c);"),
        vec![
            Decl::Stmt(Stmt::While {
                cond: ident("a", 1),
                body: Box::new(Stmt::Block(vec![])),
            }),
            Decl::Stmt(Stmt::DoWhile {
                body: Box::new(Stmt::Block(vec![])),
                cond: ident("b", 1),
            }),
            Decl::Stmt(Stmt::DoWhile {
                body: Box::new(Stmt::Empty),
                cond: ident("c", 1),
            }),
        ]
    );
}

#[test]
fn test_try_forms() {
    let decls = parse_ok("try {} catch (e) {} try {} catch {} finally {} try {} finally {}");
    assert_eq!(decls.len(), 3);
    assert_eq!(
        decls[0],
        Decl::Stmt(Stmt::Try {
            body: vec![],
            catch: Some(vec![]),
            catch_binding: Some(Name::from("e")),
            finally: None,
        })
    );
    assert_eq!(
        decls[1],
        Decl::Stmt(Stmt::Try {
            body: vec![],
            catch: Some(vec![]),
            catch_binding: None,
            finally: Some(vec![]),
        })
    );
    assert_eq!(
        decls[2],
        Decl::Stmt(Stmt::Try {
            body: vec![],
            catch: None,
            catch_binding: None,
            finally: Some(vec![]),
        })
    );
}

#[test]
fn test_return_without_value() {
    let decls = parse_ok("function f() { return; }");
    let [Decl::Function { function, .. }] = decls.as_slice() else {
        panic!("expected a function, got {decls:?}");
    };
    assert_eq!(function.body, vec![Decl::Stmt(Stmt::Return { value: Expr::Empty })]);
}

#[test]
fn test_throw_and_empty() {
    assert_eq!(
        parse_ok("throw \"x\"; ;"),
        vec![
            Decl::Stmt(Stmt::Throw { value: key("x") }),
            Decl::Stmt(Stmt::Empty),
        ]
    );
}

#[test]
fn test_table_literal_forms() {
    assert_eq!(
        parse_ok("t = { a: 1, [k]: 2, :b, };"),
        vec![Decl::Stmt(Stmt::Expr(Expr::Assign {
            target: Box::new(ident("t", 1)),
            value: Box::new(Expr::Table {
                pairs: vec![
                    TableEntry::new(key("a"), Expr::Number(1.0)),
                    TableEntry::new(ident("k", 1), Expr::Number(2.0)),
                    TableEntry::new(key("b"), ident("b", 1)),
                ],
                array: vec![],
            }),
            line: 1,
        }))]
    );
}

#[test]
fn test_array_literal() {
    assert_eq!(
        parse_ok("[1, 2, 3,];"),
        vec![Decl::Stmt(Stmt::Expr(Expr::Table {
            pairs: vec![],
            array: vec![Expr::Number(1.0), Expr::Number(2.0), Expr::Number(3.0)],
        }))]
    );
}

#[test]
fn test_function_literal_in_expression() {
    assert_eq!(
        parse_ok("var f = function (x) { return x; };"),
        vec![Decl::Variable(vec![VarBinding::new(
            Name::from("f"),
            Expr::Function(Rc::new(FunctionLit {
                params: vec![Name::from("x")],
                body: vec![Decl::Stmt(Stmt::Return {
                    value: ident("x", 1)
                })],
                kind: FunctionKind::Sync,
                line: 1,
            })),
        )])]
    );
}

#[test]
fn test_arrow_function_body() {
    let mode = LanguageMode::default().with_arrow_functions(true);
    let decls = parse_ok_with("function inc(x) => x + 1; var g = function () => 2;", mode);
    let [Decl::Function { function, .. }, Decl::Variable(_)] = decls.as_slice() else {
        panic!("expected function and variable, got {decls:?}");
    };
    assert!(matches!(
        function.body.as_slice(),
        [Decl::Stmt(Stmt::Return { value: Expr::Infix { .. } })]
    ));
}

#[test]
fn test_loop_context_inside_nested_blocks() {
    parse_ok("while (a) { if (b) { break; } else { continue; } }");
}

#[test]
fn test_lines_are_recorded() {
    let decls = parse_ok("var a = 1;\n\nb = a;");
    assert_eq!(
        decls[1],
        Decl::Stmt(Stmt::Expr(Expr::Assign {
            target: Box::new(ident("b", 3)),
            value: Box::new(ident("a", 3)),
            line: 3,
        }))
    );
}

#[test]
fn test_auto_semicolons() {
    let mode = LanguageMode::default().with_auto_semicolons(true);
    let decls = parse_ok_with(
        "var a = 1\nvar t = {\n  x: a,\n  y: 2\n}\nif (a) {\n  a = 2\n}\nelse {\n  a = 3\n}\nprint(a)\n",
        mode,
    );
    assert_eq!(decls.len(), 4);
    assert!(matches!(decls[2], Decl::Stmt(Stmt::If { else_branch: Some(_), .. })));
}

#[test]
fn test_auto_semicolons_before_closing_brace() {
    let mode = LanguageMode::default().with_auto_semicolons(true);
    let decls = parse_ok_with("function f() { return 1 }", mode);
    assert_eq!(decls.len(), 1);
}

#[test]
fn test_auto_semicolons_inside_grouping_and_index() {
    let mode = LanguageMode::default().with_auto_semicolons(true);
    let decls = parse_ok_with("var x = (\n1\n)\nvar y = t[\nx\n]\n", mode);
    assert_eq!(decls.len(), 2);
    assert!(matches!(
        &decls[0],
        Decl::Variable(bindings) if bindings[0].init == Expr::Number(1.0)
    ));
    assert!(matches!(
        &decls[1],
        Decl::Variable(bindings) if matches!(bindings[0].init, Expr::Index { .. })
    ));
}
