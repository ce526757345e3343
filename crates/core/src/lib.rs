//! # Title Warden Core
//!
//! Core business logic for validating pull request titles against configurable
//! rules.
//!
//! Title Warden checks that a PR title:
//! - is within a minimum and maximum length
//! - starts with an allowed prefix and not with a disallowed one
//! - ends with an allowed suffix and not with a disallowed one
//! - contains a match for a configured regular expression
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use title_warden_developer_platforms::PullRequestProvider;
//! use title_warden_core::{TitleWarden, config::TitleValidationConfig, errors::TitleWardenError};
//!
//! async fn validate_pr<P: PullRequestProvider + std::fmt::Debug + Sync>(
//!     provider: P,
//! ) -> Result<(), TitleWardenError> {
//!     let config = TitleValidationConfig {
//!         min_length: 10,
//!         allowed_prefixes: vec!["feat:".to_string(), "fix:".to_string()],
//!         ..Default::default()
//!     };
//!
//!     let warden = TitleWarden::new(provider, config);
//!     let check = warden.check_pull_request("owner", "repo", 123).await?;
//!
//!     match check.result.message() {
//!         None => println!("PR title is valid"),
//!         Some(reason) => println!("PR title is invalid: {}", reason),
//!     }
//!
//!     Ok(())
//! }
//! ```

use title_warden_developer_platforms::models::PullRequest;
use title_warden_developer_platforms::PullRequestProvider;

pub mod checks;
pub mod config;
use config::TitleValidationConfig;

pub mod errors;
use errors::TitleWardenError;

pub mod validation_result;
use validation_result::ValidationResult;

use tracing::{debug, error, info, instrument, warn};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Result of checking a pull request with Title Warden.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The pull request as fetched from the provider
    pub pull_request: PullRequest,

    /// The verdict for the pull request title
    pub result: ValidationResult,
}

/// Fetches pull requests and validates their titles.
///
/// The title is always fetched from the provider rather than taken from a
/// cached event payload, so a re-run after the title was edited sees the
/// current title.
#[derive(Debug)]
pub struct TitleWarden<P: PullRequestProvider + std::fmt::Debug> {
    provider: P,
    config: TitleValidationConfig,
}

impl<P: PullRequestProvider + std::fmt::Debug + Sync> TitleWarden<P> {
    /// Creates a new `TitleWarden` with the given provider and rules.
    pub fn new(provider: P, config: TitleValidationConfig) -> Self {
        Self { provider, config }
    }

    /// The rules this instance validates against.
    pub fn config(&self) -> &TitleValidationConfig {
        &self.config
    }

    /// Fetches a pull request and validates its title.
    ///
    /// # Arguments
    ///
    /// * `repo_owner` - The owner of the repository
    /// * `repo_name` - The name of the repository
    /// * `pr_number` - The pull request number
    ///
    /// # Errors
    ///
    /// Returns `TitleWardenError::GitProviderError` if the pull request cannot be
    /// fetched, or `TitleWardenError::RegexError` if the configured pattern is
    /// invalid. A title that breaks a rule is not an error; it is reported in
    /// [`CheckResult::result`].
    #[instrument(skip(self))]
    pub async fn check_pull_request(
        &self,
        repo_owner: &str,
        repo_name: &str,
        pr_number: u64,
    ) -> Result<CheckResult, TitleWardenError> {
        let pull_request = self
            .provider
            .get_pull_request(repo_owner, repo_name, pr_number)
            .await
            .map_err(|e| {
                error!(
                    repository_owner = repo_owner,
                    repository = repo_name,
                    pull_request = pr_number,
                    error = e.to_string(),
                    "Failed to fetch pull request"
                );
                TitleWardenError::GitProviderError(e.to_string())
            })?;

        info!(
            repository_owner = repo_owner,
            repository = repo_name,
            pull_request = pull_request.number,
            title = pull_request.title.as_str(),
            "Pull Request title: \"{}\"",
            pull_request.title
        );

        let result = self.check_title(&pull_request)?;
        Ok(CheckResult {
            pull_request,
            result,
        })
    }

    fn check_title(&self, pr: &PullRequest) -> Result<ValidationResult, TitleWardenError> {
        debug!(
            pull_request = pr.number,
            allowed_prefixes = ?self.config.allowed_prefixes,
            disallowed_prefixes = ?self.config.disallowed_prefixes,
            allowed_suffixes = ?self.config.allowed_suffixes,
            disallowed_suffixes = ?self.config.disallowed_suffixes,
            pattern = self.config.pattern.as_str(),
            "Checking PR title"
        );

        let result = checks::title::validate_title(&pr.title, &self.config)?;
        match &result {
            ValidationResult::Accepted => {
                info!(pull_request = pr.number, "Pull request title is valid")
            }
            ValidationResult::Rejected { rule, message } => warn!(
                pull_request = pr.number,
                rule = %rule,
                "{}",
                message
            ),
        }

        Ok(result)
    }
}
