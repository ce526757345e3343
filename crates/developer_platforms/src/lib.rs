//! # Title Warden Developer Platforms
//!
//! Abstractions over the developer platforms that host pull requests, together
//! with a GitHub implementation.

use async_trait::async_trait;

pub mod errors;

pub mod github;

pub mod models;
use errors::Error;
use models::PullRequest;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Trait for interacting with developer platforms that provide pull requests (e.g., GitHub).
///
/// Implementations of this trait fetch the current state of a pull request so that
/// its title can be validated.
///
/// # Example Implementation
///
/// ```rust,no_run
/// use title_warden_developer_platforms::{PullRequestProvider, errors::Error, models::PullRequest};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct StaticProvider {
///     title: String,
/// }
///
/// #[async_trait]
/// impl PullRequestProvider for StaticProvider {
///     async fn get_pull_request(
///         &self,
///         _repo_owner: &str,
///         _repo_name: &str,
///         pr_number: u64,
///     ) -> Result<PullRequest, Error> {
///         Ok(PullRequest {
///             number: pr_number,
///             title: self.title.clone(),
///             draft: false,
///             body: None,
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait PullRequestProvider {
    /// Retrieves a pull request from the Git provider.
    ///
    /// # Arguments
    ///
    /// * `repo_owner` - The owner of the repository
    /// * `repo_name` - The name of the repository
    /// * `pr_number` - The pull request number
    ///
    /// # Returns
    ///
    /// A `Result` containing the pull request information
    async fn get_pull_request(
        &self,
        repo_owner: &str,
        repo_name: &str,
        pr_number: u64,
    ) -> Result<PullRequest, Error>;
}
