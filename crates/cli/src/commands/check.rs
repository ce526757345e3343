use clap::{Args, ValueEnum};
use title_warden_core::checks::title::validate_title;
use title_warden_core::validation_result::ValidationResult;
use tracing::{debug, instrument};

use crate::errors::CliError;
use crate::inputs::RuleArgs;

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

/// Output format for the check command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The title to validate
    pub title: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub rules: RuleArgs,
}

/// Executes the `check` command.
///
/// Validates a title given on the command line without contacting any
/// platform, prints the verdict, and fails with `CliError::ValidationFailed`
/// if the title is rejected.
#[instrument(skip(args))]
pub fn execute(args: CheckArgs) -> Result<(), CliError> {
    let config = args.rules.build_config()?;
    debug!(title = args.title.as_str(), "Checking title");

    let result = validate_title(&args.title, &config)?;
    println!("{}", render(&result, args.format)?);

    match result {
        ValidationResult::Accepted => Ok(()),
        ValidationResult::Rejected { message, .. } => Err(CliError::ValidationFailed(message)),
    }
}

/// Renders a verdict in the requested format.
pub fn render(result: &ValidationResult, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(match result {
            ValidationResult::Accepted => "Pull Request title is valid".to_string(),
            ValidationResult::Rejected { rule, message } => format!("[{}] {}", rule, message),
        }),
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .map_err(|e| CliError::Other(format!("Failed to serialize result: {}", e))),
    }
}
