//! Configuration settings for the Title Warden core functionality.
//!
//! Rule configuration arrives as flat string inputs (the way GitHub Actions
//! passes `with:` values) or as a TOML file. Both are coerced here, once, into
//! an immutable [`TitleValidationConfig`] that the validator consumes.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{ConfigLoadError, TitleWardenError};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Schema version accepted by [`load_title_warden_config`]
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Separator between entries of a prefix or suffix list input
pub const LIST_SEPARATOR: char = ',';

/// Workflow events for which a title check is meaningful
pub const SUPPORTED_EVENTS: [&str; 1] = ["pull_request"];

/// Rules a pull request title is validated against.
///
/// Empty lists, an empty pattern and zero lengths disable the corresponding
/// rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleValidationConfig {
    /// Minimum title length in characters
    pub min_length: usize,

    /// Maximum title length in characters, 0 for no upper bound
    pub max_length: usize,

    /// The title must start with one of these
    pub allowed_prefixes: Vec<String>,

    /// The title must not start with any of these
    pub disallowed_prefixes: Vec<String>,

    /// The title must end with one of these
    pub allowed_suffixes: Vec<String>,

    /// The title must not end with any of these
    pub disallowed_suffixes: Vec<String>,

    /// Compare prefixes without lowercasing
    pub prefix_case_sensitive: bool,

    /// Compare suffixes without lowercasing
    pub suffix_case_sensitive: bool,

    /// Regular expression the title must contain a match for
    #[serde(alias = "regex")]
    pub pattern: String,
}

impl TitleValidationConfig {
    /// Builds a configuration from raw inputs alone.
    pub fn from_inputs(inputs: &ActionInputs) -> Result<Self, TitleWardenError> {
        inputs.apply_to(Self::default())
    }
}

/// Raw, uncoerced rule inputs keyed by their action input names.
///
/// `None` means the input was not provided at all; a provided-but-empty
/// value is `Some("")` and still overrides the base configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInputs {
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub allowed_prefixes: Option<String>,
    pub disallowed_prefixes: Option<String>,
    pub allowed_suffixes: Option<String>,
    pub disallowed_suffixes: Option<String>,
    pub prefix_case_sensitive: Option<String>,
    pub suffix_case_sensitive: Option<String>,
    pub regex: Option<String>,
}

impl ActionInputs {
    /// Overrides the fields of `base` for every input that was provided.
    ///
    /// # Errors
    ///
    /// Returns `TitleWardenError::InvalidInput` if a length input is not a
    /// non-negative integer.
    pub fn apply_to(
        &self,
        base: TitleValidationConfig,
    ) -> Result<TitleValidationConfig, TitleWardenError> {
        let mut config = base;

        if let Some(raw) = &self.min_length {
            config.min_length = parse_length("min_length", raw)?;
        }
        if let Some(raw) = &self.max_length {
            config.max_length = parse_length("max_length", raw)?;
        }
        if let Some(raw) = &self.allowed_prefixes {
            config.allowed_prefixes = parse_list(raw);
        }
        if let Some(raw) = &self.disallowed_prefixes {
            config.disallowed_prefixes = parse_list(raw);
        }
        if let Some(raw) = &self.allowed_suffixes {
            config.allowed_suffixes = parse_list(raw);
        }
        if let Some(raw) = &self.disallowed_suffixes {
            config.disallowed_suffixes = parse_list(raw);
        }
        if let Some(raw) = &self.prefix_case_sensitive {
            config.prefix_case_sensitive = parse_flag(raw);
        }
        if let Some(raw) = &self.suffix_case_sensitive {
            config.suffix_case_sensitive = parse_flag(raw);
        }
        if let Some(raw) = &self.regex {
            config.pattern = raw.clone();
        }

        Ok(config)
    }
}

/// Top-level structure of a Title Warden TOML configuration file.
///
/// ```toml
/// schemaVersion = 1
///
/// [title]
/// min_length = 10
/// allowed_prefixes = ["feat:", "fix:"]
/// regex = "\\[JIRA-\\d+\\]"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleWardenConfig {
    #[serde(rename = "schemaVersion")]
    pub schema_version: u32,

    #[serde(default)]
    pub title: TitleValidationConfig,
}

impl Default for TitleWardenConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            title: TitleValidationConfig::default(),
        }
    }
}

/// Splits a delimited list input into its entries.
///
/// Entries are taken literally, surrounding whitespace included. Empty entries
/// are dropped, so an empty input yields an empty list and disables the rule.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a length input. An empty value means 0.
pub fn parse_length(key: &str, raw: &str) -> Result<usize, TitleWardenError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    trimmed
        .parse::<usize>()
        .map_err(|_| TitleWardenError::InvalidInput {
            key: key.to_string(),
            value: raw.to_string(),
        })
}

/// Boolean inputs are enabled only by the literal string `true`.
pub fn parse_flag(raw: &str) -> bool {
    raw == "true"
}

/// Loads the title-warden configuration from the given path.
///
/// # Arguments
/// * `path` - Path to the configuration file
///
/// # Returns
/// * `Ok(TitleWardenConfig)` if loaded and valid
/// * `Err(ConfigLoadError)` if the file is missing, malformed, or has an
///   unsupported schema version
pub fn load_title_warden_config<P: AsRef<Path>>(
    path: P,
) -> Result<TitleWardenConfig, ConfigLoadError> {
    let path_ref = path.as_ref();
    let content = match fs::read_to_string(path_ref) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigLoadError::NotFound(path_ref.display().to_string()));
        }
        Err(e) => return Err(ConfigLoadError::Io(e)),
    };
    let config: TitleWardenConfig = toml::from_str(&content)?;
    if config.schema_version != CURRENT_SCHEMA_VERSION {
        return Err(ConfigLoadError::UnsupportedSchemaVersion(
            config.schema_version,
        ));
    }
    Ok(config)
}
