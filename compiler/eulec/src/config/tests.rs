use pretty_assertions::assert_eq;

use super::*;

fn config(vars: &[(&str, &str)]) -> Result<RunConfig, ConfigError> {
    RunConfig::from_lookup(|name| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_owned())
    })
}

#[test]
fn test_defaults_when_unset() {
    assert_eq!(config(&[]).unwrap(), RunConfig::default());
    assert_eq!(RunConfig::default().max_call_depth, 1024);
}

#[test]
fn test_switches() {
    let resolved = config(&[
        (AUTO_SEMICOLONS_VAR, "1"),
        (OBJECT_ORIENTED_VAR, "false"),
        (ARROW_FUNCTIONS_VAR, "TRUE"),
    ])
    .unwrap();
    assert!(resolved.mode.auto_semicolons);
    assert!(!resolved.mode.object_oriented);
    assert!(resolved.mode.arrow_functions);
}

#[test]
fn test_call_depth() {
    let resolved = config(&[(MAX_CALL_DEPTH_VAR, " 64 ")]).unwrap();
    assert_eq!(resolved.max_call_depth, 64);
}

#[test]
fn test_invalid_values() {
    let err = config(&[(AUTO_SEMICOLONS_VAR, "yes")]).unwrap_err();
    assert_eq!(err.variable, AUTO_SEMICOLONS_VAR);
    assert_eq!(
        err.to_string(),
        "invalid value \"yes\" for EULE_AUTO_SEMICOLONS"
    );

    assert!(config(&[(MAX_CALL_DEPTH_VAR, "0")]).is_err());
    assert!(config(&[(MAX_CALL_DEPTH_VAR, "deep")]).is_err());
}

#[test]
fn test_builders() {
    let resolved = RunConfig::default()
        .with_mode(LanguageMode::default().with_arrow_functions(true))
        .with_max_call_depth(8);
    assert!(resolved.mode.arrow_functions);
    assert_eq!(resolved.max_call_depth, 8);
}
