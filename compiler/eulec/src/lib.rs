//! Eulec - runs eule scripts.
//!
//! ```text
//! source ──► Scanner ──► Parser ──► [Decl] ──► Interpreter ──► Value
//!                 └── diagnostics ──┘            └── runtime diagnostic
//! ```
//!
//! Any scanner or parser diagnostic stops the run before evaluation, and
//! all of them are reported together.

mod config;
mod tracing_setup;

pub use config::{
    ConfigError, RunConfig, ARROW_FUNCTIONS_VAR, AUTO_SEMICOLONS_VAR, MAX_CALL_DEPTH_VAR,
    OBJECT_ORIENTED_VAR,
};
pub use eule_diagnostic::Diagnostic;
pub use eule_eval::{buffer_handler, stdout_handler, SharedPrintHandler, Value};
pub use eule_lexer::LanguageMode;
pub use tracing_setup::init_tracing;

use eule_eval::InterpreterBuilder;
use eule_parse::parse_source;

/// Parse `source` and, if it parsed cleanly, evaluate it in a fresh global
/// scope that holds only the built-in natives.
///
/// Returns the value of the last top-level declaration. On failure the
/// diagnostics are the scanner and parser errors in line order, or the
/// single runtime error that aborted evaluation.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_source(
    source: &str,
    config: &RunConfig,
    print_handler: SharedPrintHandler,
) -> Result<Value, Vec<Diagnostic>> {
    let parsed = parse_source(source, config.mode);
    if parsed.has_errors() {
        let diagnostics = parsed.diagnostics();
        tracing::debug!(
            lexical = diagnostics.iter().filter(|d| d.code.is_lexer_error()).count(),
            syntax = diagnostics.iter().filter(|d| d.code.is_parser_error()).count(),
            "parse failed"
        );
        return Err(diagnostics);
    }

    let mut interpreter = InterpreterBuilder::new()
        .print_handler(print_handler)
        .max_call_depth(config.max_call_depth)
        .build();
    interpreter
        .evaluate(&parsed.decls)
        .map_err(|error| vec![error.to_diagnostic()])
}
