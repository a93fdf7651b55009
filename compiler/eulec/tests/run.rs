//! End-to-end runs through `run_source`.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use eulec::{buffer_handler, run_source, Diagnostic, LanguageMode, RunConfig, Value};
use pretty_assertions::assert_eq;

fn run_with(source: &str, config: &RunConfig) -> (Result<Value, Vec<Diagnostic>>, String) {
    let handler = buffer_handler();
    let result = run_source(source, config, handler.clone());
    (result, handler.get_output())
}

fn output(source: &str) -> String {
    let (result, out) = run_with(source, &RunConfig::default());
    if let Err(diagnostics) = result {
        let rendered: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
        panic!("run failed:\n{}", rendered.join("\n"));
    }
    out
}

fn diagnostics(source: &str) -> Vec<String> {
    run_with(source, &RunConfig::default())
        .0
        .unwrap_err()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_numeric_literal_magnitudes() {
    assert_eq!(
        output("print(3, 3.14, 0x1F, 0b10, 1_000);"),
        "3 3.14 31 2 1000\n"
    );
}

#[test]
fn test_malformed_numbers_are_scan_errors() {
    for source in ["3_;", "3.;", "3.1_;", "3abc;"] {
        let (result, out) = run_with(source, &RunConfig::default());
        let diagnostics = result.unwrap_err();
        assert!(
            diagnostics
                .iter()
                .any(|d| d.code.is_lexer_error()),
            "{source}: {diagnostics:?}"
        );
        assert_eq!(out, "", "{source} must not run");
    }
}

#[test]
fn test_block_shadowing_law() {
    assert_eq!(
        output("var a = \"outer\"; { var a = \"inner\"; print(a); } print(a);"),
        "inner\nouter\n"
    );
}

#[test]
fn test_closures_see_later_writes() {
    let source = "
        var n = 1;
        var show = function () { print(n); };
        show();
        n = 2;
        show();";
    assert_eq!(output(source), "1\n2\n");
}

#[test]
fn test_loops_with_break_and_continue() {
    let source = "
        var total = 0;
        for (var i = 0; i < 10; ++i) {
            if (i % 2 == 0) continue;
            if (i > 7) break;
            total += i;
        }
        print(total);";
    assert_eq!(output(source), "16\n");
}

#[test]
fn test_try_finally_propagates_throw() {
    let (result, out) = run_with(
        "try { throw 1; } finally { print(\"cleanup\"); }",
        &RunConfig::default(),
    );
    assert_eq!(out, "cleanup\n");
    let rendered: Vec<String> = result.unwrap_err().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["error [E2100]: uncaught exception: 1"]);
}

#[test]
fn test_runs_are_deterministic() {
    let source = "
        var t = {a: 1};
        var u = t {b: 2};
        for (var i = 0; i < 3; ++i) u[i] = i;
        print(u.a, u.b, u[2]);";
    let first = output(source);
    assert_eq!(first, "1 2 2\n");
    assert_eq!(first, output(source));
}

#[test]
fn test_prototype_chain() {
    let source = "
        var animal = {sound: \"...\", legs: 4};
        var dog = animal {sound: \"woof\"};
        print(dog.sound, dog.legs, animal.sound);
        dog.legs = 3;
        print(dog.legs, animal.legs);";
    assert_eq!(output(source), "woof 4 ...\n3 4\n");
}

#[test]
fn test_result_is_last_declaration() {
    let (result, _) = run_with("var x = 20; x + 1;", &RunConfig::default());
    assert_eq!(result.unwrap(), Value::Number(21.0));
}

#[test]
fn test_parse_errors_block_evaluation() {
    let (result, out) = run_with("print(1);\nvar = 2;", &RunConfig::default());
    assert!(result.is_err());
    assert_eq!(out, "");
}

#[test]
fn test_all_parse_errors_are_reported() {
    let rendered = diagnostics("var x = 1;\n1 = 2;\nvar y = ;");
    assert_eq!(rendered.len(), 2, "{rendered:?}");
    assert_eq!(
        rendered[0],
        "error [E1005]: line 2 at '=': Invalid assignment target."
    );
    assert!(rendered[1].starts_with("error [E1002]: line 3 at ';'"), "{}", rendered[1]);
}

#[test]
fn test_runtime_error_diagnostic() {
    assert_eq!(
        diagnostics("var a = 1;\nprint(missing);"),
        vec!["error [E2002]: line 2: undefined variable 'missing'"]
    );
}

#[test]
fn test_auto_semicolon_mode() {
    let config =
        RunConfig::default().with_mode(LanguageMode::default().with_auto_semicolons(true));
    let (result, out) = run_with("var x = 1\nprint(x + 1)\n", &config);
    result.unwrap();
    assert_eq!(out, "2\n");
}

#[test]
fn test_arrow_function_mode() {
    let config =
        RunConfig::default().with_mode(LanguageMode::default().with_arrow_functions(true));
    let (result, out) = run_with(
        "var double = function (a) => a * 2;\nprint(double(4));",
        &config,
    );
    result.unwrap();
    assert_eq!(out, "8\n");
}

#[test]
fn test_call_depth_from_config() {
    let config = RunConfig::default().with_max_call_depth(10);
    let (result, _) = run_with(
        "function down(n) { if (n == 0) return 0; return down(n - 1); }\ndown(20);",
        &config,
    );
    let diagnostics = result.unwrap_err();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code.to_string(), "E2006");
}
