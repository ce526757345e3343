use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use crate::{errors::Error, models::PullRequest, PullRequestProvider};

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;

/// Pull request fields returned by `GET /repos/{owner}/{repo}/pulls/{number}`.
#[derive(Debug, Deserialize)]
struct PullRequestResponse {
    number: u64,
    title: Option<String>,
    draft: Option<bool>,
    body: Option<String>,
}

/// Creates an `Octocrab` client authenticated with a personal or workflow token.
///
/// When `base_uri` is provided the client talks to that API root instead of
/// `https://api.github.com`, which is how GitHub Enterprise Server instances
/// are reached. GitHub Actions exposes the correct value as `GITHUB_API_URL`.
///
/// # Errors
///
/// Returns `Error::AuthError` if the base URI cannot be parsed or the client
/// cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use title_warden_developer_platforms::github::{create_token_client, GitHubProvider};
///
/// # fn example() -> Result<(), title_warden_developer_platforms::errors::Error> {
/// let client = create_token_client("ghp_example", None)?;
/// let provider = GitHubProvider::new(client);
/// # Ok(())
/// # }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &str, base_uri: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder();
    if let Some(uri) = base_uri {
        debug!(base_uri = uri, "Using custom GitHub API base URI");
        builder = builder.base_uri(uri).map_err(|e| {
            Error::AuthError(format!("Invalid GitHub API base URI '{}': {}", uri, e))
        })?;
    }

    builder
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to create the GitHub client: {}", e)))
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = *source;
            error!(
                error_message = err.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::Uri { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}

/// [`PullRequestProvider`] backed by the GitHub REST API.
#[derive(Debug)]
pub struct GitHubProvider {
    client: Octocrab,
}

impl GitHubProvider {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PullRequestProvider for GitHubProvider {
    #[instrument]
    async fn get_pull_request(
        &self,
        repo_owner: &str,
        repo_name: &str,
        pr_number: u64,
    ) -> Result<PullRequest, Error> {
        let route = format!("/repos/{}/{}/pulls/{}", repo_owner, repo_name, pr_number);
        match self
            .client
            .get::<PullRequestResponse, _, ()>(route, None)
            .await
        {
            Ok(pr) => {
                info!(
                    repository_owner = repo_owner,
                    repository = repo_name,
                    pull_request = pr.number,
                    "Fetched pull request"
                );
                Ok(PullRequest {
                    number: pr.number,
                    title: pr.title.unwrap_or_default(),
                    draft: pr.draft.unwrap_or_default(),
                    body: pr.body,
                })
            }
            Err(e) => {
                log_octocrab_error("Failed to get pull request information", e);
                Err(Error::FailedToFetchPullRequest(
                    repo_owner.to_string(),
                    repo_name.to_string(),
                    pr_number,
                ))
            }
        }
    }
}
