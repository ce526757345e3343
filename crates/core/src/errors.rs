use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Execution failures of the title check.
///
/// These are distinct from a rejected title: they mean the check itself could
/// not run, for example because an input was malformed or the pull request
/// could not be fetched.
#[derive(Error, Debug)]
pub enum TitleWardenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Git provider error: {0}")]
    GitProviderError(String),

    #[error("Invalid value '{value}' for input '{key}'")]
    InvalidInput { key: String, value: String },

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Failures while loading a Title Warden configuration file.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unsupported configuration schema version: {0}")]
    UnsupportedSchemaVersion(u32),
}

impl From<ConfigLoadError> for TitleWardenError {
    fn from(err: ConfigLoadError) -> Self {
        TitleWardenError::ConfigError(err.to_string())
    }
}
