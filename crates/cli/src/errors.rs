use thiserror::Error;
use title_warden_core::errors::TitleWardenError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Invalid arguments
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The workflow was triggered by an event that has no pull request title
    #[error("Invalid event: {0}")]
    UnsupportedEvent(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Other errors
    #[error("Error: {0}")]
    Other(String),
}

impl CliError {
    /// The message shown to the user when the run fails.
    ///
    /// A failed validation reports the rejection message on its own; every
    /// other error keeps its category prefix.
    pub fn failure_message(&self) -> String {
        match self {
            CliError::ValidationFailed(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(err.to_string())
    }
}

impl From<TitleWardenError> for CliError {
    fn from(err: TitleWardenError) -> Self {
        match err {
            TitleWardenError::ConfigError(message) => CliError::ConfigError(message),
            TitleWardenError::GitProviderError(message) => CliError::NetworkError(message),
            e @ TitleWardenError::InvalidInput { .. } => CliError::ConfigError(e.to_string()),
            e @ TitleWardenError::RegexError(_) => CliError::ConfigError(e.to_string()),
        }
    }
}

impl std::process::Termination for CliError {
    fn report(self) -> std::process::ExitCode {
        match self {
            CliError::ConfigError(_) => std::process::ExitCode::from(2),
            CliError::AuthError(_) => std::process::ExitCode::from(3),
            CliError::NetworkError(_) => std::process::ExitCode::from(4),
            CliError::InvalidArguments(_) => std::process::ExitCode::from(5),
            CliError::UnsupportedEvent(_) => std::process::ExitCode::from(5),
            CliError::ValidationFailed(_) => std::process::ExitCode::from(1),
            CliError::Other(_) => std::process::ExitCode::FAILURE,
        }
    }
}
