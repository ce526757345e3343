//! # Models
//!
//! This module contains the data models used when talking to developer platforms.
//!
//! These models represent the entities Title Warden works with: the pull request
//! whose title is validated and the subset of the workflow event payload that
//! identifies which pull request triggered the run. They are serializable and
//! deserializable to facilitate integration with Git provider APIs.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a pull request from a Git provider.
///
/// # Examples
///
/// ```
/// use title_warden_developer_platforms::models::PullRequest;
///
/// let pr = PullRequest {
///     number: 123,
///     title: "feat(auth): add GitHub login".to_string(),
///     draft: false,
///     body: Some("This PR adds GitHub login functionality.".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    /// The pull request number
    pub number: u64,

    /// The title of the pull request
    pub title: String,

    /// Whether the pull request is a draft
    #[serde(default)]
    pub draft: bool,

    /// The description/body of the pull request, if any
    pub body: Option<String>,
}

/// The portion of a workflow event payload that Title Warden reads.
///
/// GitHub Actions writes the full webhook payload of the triggering event to the
/// file named by `GITHUB_EVENT_PATH`. Only the pull request reference is needed
/// to locate the pull request; its title is deliberately not used because it may
/// be stale when a job is re-run after the title was edited.
#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    /// The pull request that triggered the event, if any
    pub pull_request: Option<PullRequestEvent>,
}

impl EventPayload {
    /// Parses an event payload from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|_| Error::InvalidResponse)
    }
}

/// Pull request information embedded in an event payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    /// The pull request number
    pub number: u64,

    /// The base branch reference of the pull request
    pub base: BaseRef,
}

/// The base (target) side of a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseRef {
    /// The owner of the base repository
    pub user: User,

    /// The base repository
    pub repo: Repository,
}

/// Represents a repository on a Git provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// The name of the repository
    pub name: String,
}

/// Represents a user or organization on a Git provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The login of the user
    pub login: String,
}
