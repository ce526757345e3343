use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use title_warden_core::config::SUPPORTED_EVENTS;
use title_warden_core::validation_result::ValidationResult;
use title_warden_core::TitleWarden;
use title_warden_developer_platforms::github::{create_token_client, GitHubProvider};
use title_warden_developer_platforms::models::EventPayload;
use tracing::{error, info, instrument};

use crate::errors::CliError;
use crate::inputs::RuleArgs;

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;

/// Arguments for the action command
#[derive(Args, Debug)]
pub struct ActionArgs {
    /// Token used to read the pull request
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Name of the event that triggered the workflow
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// Path of the file holding the event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// GitHub REST API root, for GitHub Enterprise Server
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    #[command(flatten)]
    pub rules: RuleArgs,
}

/// Identifies the pull request a workflow run is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestTarget {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

/// Executes the `action` command.
///
/// Only `pull_request` events are processed. The pull request is fetched from
/// the REST API instead of read from the event payload: when a user edits the
/// title and re-runs the workflow, the payload still carries the old title.
///
/// # Errors
///
/// - `CliError::ConfigError` if the token is missing or an input is invalid
/// - `CliError::UnsupportedEvent` if the workflow was not triggered by a pull request
/// - `CliError::AuthError` if the GitHub client cannot be created
/// - `CliError::NetworkError` if the pull request cannot be fetched
/// - `CliError::ValidationFailed` if the title breaks a rule
#[instrument(skip(args))]
pub async fn execute(args: ActionArgs) -> Result<(), CliError> {
    let token = required_input("github_token", args.github_token.as_deref())?;

    let event_name = args.event_name.as_deref().unwrap_or_default();
    info!("Event name: {}", event_name);
    ensure_supported_event(event_name)?;

    let event_path = args.event_path.as_deref().ok_or_else(|| {
        CliError::ConfigError("GITHUB_EVENT_PATH is not set".to_string())
    })?;
    let target = read_event_target(event_path)
        .map_err(|e| CliError::ConfigError(format!("{:#}", e)))?;

    let config = args.rules.build_config()?;

    let client = create_token_client(&token, args.api_url.as_deref())
        .map_err(|e| CliError::AuthError(e.to_string()))?;
    let warden = TitleWarden::new(GitHubProvider::new(client), config);

    let check = warden
        .check_pull_request(&target.owner, &target.repo, target.number)
        .await
        .inspect_err(|e| {
            error!(
                repository_owner = target.owner.as_str(),
                repository = target.repo.as_str(),
                pull_request = target.number,
                error = e.to_string(),
                "Failed to check pull request title"
            );
        })?;

    match check.result {
        ValidationResult::Accepted => Ok(()),
        ValidationResult::Rejected { message, .. } => Err(CliError::ValidationFailed(message)),
    }
}

/// Returns the trimmed value of a required input.
fn required_input(name: &str, value: Option<&str>) -> Result<String, CliError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CliError::ConfigError(format!(
            "Input required and not supplied: {}",
            name
        ))),
    }
}

/// Fails unless the event is one that carries a pull request.
pub fn ensure_supported_event(event_name: &str) -> Result<(), CliError> {
    if SUPPORTED_EVENTS.contains(&event_name) {
        Ok(())
    } else {
        Err(CliError::UnsupportedEvent(event_name.to_string()))
    }
}

/// Reads the event payload file and extracts the pull request it refers to.
///
/// The base repository is used, so pull requests from forks resolve to the
/// repository they target.
pub fn read_event_target(path: &Path) -> Result<PullRequestTarget> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read event payload from {}", path.display()))?;
    let payload = EventPayload::from_json(&content)
        .with_context(|| format!("Failed to parse event payload from {}", path.display()))?;
    let pull_request = payload
        .pull_request
        .context("Event payload does not contain a pull request")?;

    Ok(PullRequestTarget {
        owner: pull_request.base.user.login,
        repo: pull_request.base.repo.name,
        number: pull_request.number,
    })
}
