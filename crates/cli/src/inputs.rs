use std::path::PathBuf;

use clap::Args;
use title_warden_core::config::{load_title_warden_config, ActionInputs, TitleValidationConfig};
use title_warden_core::errors::TitleWardenError;
use tracing::{debug, info};

use crate::errors::CliError;

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;

/// Rule inputs shared by every command.
///
/// Each rule can be given as a flag or through the `INPUT_<NAME>` environment
/// variable that GitHub Actions sets for `with:` values. Values are strings and
/// are coerced by the core configuration module.
#[derive(Args, Debug, Default, Clone)]
pub struct RuleArgs {
    /// Minimum title length
    #[arg(long, env = "INPUT_MIN_LENGTH")]
    pub min_length: Option<String>,

    /// Maximum title length, 0 for no limit
    #[arg(long, env = "INPUT_MAX_LENGTH")]
    pub max_length: Option<String>,

    /// Comma separated prefixes, one of which the title must start with
    #[arg(long, env = "INPUT_ALLOWED_PREFIXES", allow_hyphen_values = true)]
    pub allowed_prefixes: Option<String>,

    /// Comma separated prefixes the title must not start with
    #[arg(long, env = "INPUT_DISALLOWED_PREFIXES", allow_hyphen_values = true)]
    pub disallowed_prefixes: Option<String>,

    /// Comma separated suffixes, one of which the title must end with
    #[arg(long, env = "INPUT_ALLOWED_SUFFIXES", allow_hyphen_values = true)]
    pub allowed_suffixes: Option<String>,

    /// Comma separated suffixes the title must not end with
    #[arg(long, env = "INPUT_DISALLOWED_SUFFIXES", allow_hyphen_values = true)]
    pub disallowed_suffixes: Option<String>,

    /// Compare prefixes case sensitively ("true" to enable)
    #[arg(long, env = "INPUT_PREFIX_CASE_SENSITIVE")]
    pub prefix_case_sensitive: Option<String>,

    /// Compare suffixes case sensitively ("true" to enable)
    #[arg(long, env = "INPUT_SUFFIX_CASE_SENSITIVE")]
    pub suffix_case_sensitive: Option<String>,

    /// Regular expression the title must contain a match for
    #[arg(long, env = "INPUT_REGEX", allow_hyphen_values = true)]
    pub regex: Option<String>,

    /// TOML file with base rules; other inputs override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl RuleArgs {
    /// Converts the arguments into raw inputs.
    ///
    /// Whole values are trimmed of surrounding whitespace, matching how the
    /// Actions toolkit reads inputs. Individual list entries are not trimmed.
    pub fn to_action_inputs(&self) -> ActionInputs {
        let trimmed = |value: &Option<String>| value.as_ref().map(|v| v.trim().to_string());

        ActionInputs {
            min_length: trimmed(&self.min_length),
            max_length: trimmed(&self.max_length),
            allowed_prefixes: trimmed(&self.allowed_prefixes),
            disallowed_prefixes: trimmed(&self.disallowed_prefixes),
            allowed_suffixes: trimmed(&self.allowed_suffixes),
            disallowed_suffixes: trimmed(&self.disallowed_suffixes),
            prefix_case_sensitive: trimmed(&self.prefix_case_sensitive),
            suffix_case_sensitive: trimmed(&self.suffix_case_sensitive),
            regex: trimmed(&self.regex),
        }
    }

    /// Builds the validation configuration from the optional file and the inputs.
    pub fn build_config(&self) -> Result<TitleValidationConfig, CliError> {
        let base = match &self.config {
            Some(path) => {
                debug!("Loading title rules from {:?}", path);
                let file_config =
                    load_title_warden_config(path).map_err(TitleWardenError::from)?;
                info!("Loaded title rules from {:?}", path);
                file_config.title
            }
            None => TitleValidationConfig::default(),
        };

        let config = self.to_action_inputs().apply_to(base)?;

        info!(
            min_length = config.min_length,
            max_length = config.max_length,
            prefix_case_sensitive = config.prefix_case_sensitive,
            suffix_case_sensitive = config.suffix_case_sensitive,
            "Allowed Prefixes: {:?}, Disallowed Prefixes: {:?}, Allowed Suffixes: {:?}, Disallowed Suffixes: {:?}",
            config.allowed_prefixes,
            config.disallowed_prefixes,
            config.allowed_suffixes,
            config.disallowed_suffixes,
        );

        Ok(config)
    }
}
