//! Run configuration.
//!
//! Everything is resolved once, before scanning starts. The environment
//! variables mirror the fields:
//!
//! | variable               | field                            |
//! |------------------------|----------------------------------|
//! | `EULE_AUTO_SEMICOLONS` | `mode.auto_semicolons`           |
//! | `EULE_OBJECT_ORIENTED` | `mode.object_oriented`           |
//! | `EULE_ARROW_FUNCTIONS` | `mode.arrow_functions`           |
//! | `EULE_MAX_CALL_DEPTH`  | `max_call_depth`                 |
//!
//! Switches accept `1`/`true` and `0`/`false`.

use std::fmt;

use eule_eval::interpreter::DEFAULT_MAX_CALL_DEPTH;
use eule_lexer::LanguageMode;

pub const AUTO_SEMICOLONS_VAR: &str = "EULE_AUTO_SEMICOLONS";
pub const OBJECT_ORIENTED_VAR: &str = "EULE_OBJECT_ORIENTED";
pub const ARROW_FUNCTIONS_VAR: &str = "EULE_ARROW_FUNCTIONS";
pub const MAX_CALL_DEPTH_VAR: &str = "EULE_MAX_CALL_DEPTH";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RunConfig {
    pub mode: LanguageMode,
    pub max_call_depth: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            mode: LanguageMode::default(),
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn with_mode(mut self, mode: LanguageMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the configuration through `lookup`; unset variables keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let flag = |variable: &'static str| -> Result<bool, ConfigError> {
            match lookup(variable) {
                None => Ok(false),
                Some(value) => parse_flag(&value).ok_or(ConfigError { variable, value }),
            }
        };

        let mode = LanguageMode::default()
            .with_auto_semicolons(flag(AUTO_SEMICOLONS_VAR)?)
            .with_object_oriented(flag(OBJECT_ORIENTED_VAR)?)
            .with_arrow_functions(flag(ARROW_FUNCTIONS_VAR)?);

        let max_call_depth = match lookup(MAX_CALL_DEPTH_VAR) {
            None => DEFAULT_MAX_CALL_DEPTH,
            Some(value) => match value.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => depth,
                _ => {
                    return Err(ConfigError {
                        variable: MAX_CALL_DEPTH_VAR,
                        value,
                    })
                }
            },
        };

        tracing::debug!(?mode, max_call_depth, "resolved run configuration");
        Ok(RunConfig {
            mode,
            max_call_depth,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" | "" => Some(false),
        _ => None,
    }
}

/// An environment variable with a value it cannot take.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.variable)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
