use super::*;
use anyhow::anyhow;
use std::process::{ExitCode, Termination};

#[test]
fn test_config_error_display() {
    let err = CliError::ConfigError("bad config".to_string());
    assert_eq!(format!("{}", err), "Configuration error: bad config");
}

#[test]
fn test_auth_error_display() {
    let err = CliError::AuthError("bad auth".to_string());
    assert_eq!(format!("{}", err), "Authentication error: bad auth");
}

#[test]
fn test_network_error_display() {
    let err = CliError::NetworkError("net fail".to_string());
    assert_eq!(format!("{}", err), "Network error: net fail");
}

#[test]
fn test_invalid_arguments_display() {
    let err = CliError::InvalidArguments("bad arg".to_string());
    assert_eq!(format!("{}", err), "Invalid arguments: bad arg");
}

#[test]
fn test_unsupported_event_display() {
    let err = CliError::UnsupportedEvent("push".to_string());
    assert_eq!(format!("{}", err), "Invalid event: push");
}

#[test]
fn test_validation_failed_display() {
    let err = CliError::ValidationFailed("fail".to_string());
    assert_eq!(format!("{}", err), "Validation failed: fail");
}

#[test]
fn test_other_error_display() {
    let err = CliError::Other("other".to_string());
    assert_eq!(format!("{}", err), "Error: other");
}

#[test]
fn test_failure_message() {
    let rejected = CliError::ValidationFailed("Pull Request title \"x\" is too short".to_string());
    assert_eq!(rejected.failure_message(), "Pull Request title \"x\" is too short");

    let event = CliError::UnsupportedEvent("push".to_string());
    assert_eq!(event.failure_message(), "Invalid event: push");
}

#[test]
fn test_from_anyhow_error() {
    let err: CliError = anyhow!("anyhow error").into();
    assert!(matches!(err, CliError::Other(_)));
}

#[test]
fn test_from_title_warden_error() {
    let err: CliError = TitleWardenError::GitProviderError("boom".to_string()).into();
    assert!(matches!(err, CliError::NetworkError(ref m) if m == "boom"));

    let err: CliError = TitleWardenError::ConfigError("bad".to_string()).into();
    assert!(matches!(err, CliError::ConfigError(ref m) if m == "bad"));

    let regex_err = regex_error();
    let err: CliError = regex_err.into();
    assert!(matches!(err, CliError::ConfigError(ref m) if m.starts_with("Regex error: ")));
}

fn regex_error() -> TitleWardenError {
    let config = title_warden_core::config::TitleValidationConfig {
        pattern: "(".to_string(),
        ..Default::default()
    };
    title_warden_core::checks::title::validate_title("title", &config).unwrap_err()
}

#[test]
fn test_exit_codes() {
    let cases = vec![
        (CliError::ValidationFailed(String::new()), ExitCode::from(1)),
        (CliError::ConfigError(String::new()), ExitCode::from(2)),
        (CliError::AuthError(String::new()), ExitCode::from(3)),
        (CliError::NetworkError(String::new()), ExitCode::from(4)),
        (CliError::InvalidArguments(String::new()), ExitCode::from(5)),
        (CliError::UnsupportedEvent(String::new()), ExitCode::from(5)),
        (CliError::Other(String::new()), ExitCode::FAILURE),
    ];

    for (err, expected) in cases {
        assert_eq!(format!("{:?}", err.report()), format!("{:?}", expected));
    }
}
