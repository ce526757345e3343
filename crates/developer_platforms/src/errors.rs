#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types for developer platform operations.
///
/// This enum represents the errors that can occur when interacting with
/// developer platforms like GitHub. Each variant provides specific context
/// about the type of failure encountered.
///
/// # Examples
///
/// ```rust
/// use title_warden_developer_platforms::errors::Error;
///
/// let auth_error = Error::AuthError("Invalid token".to_string());
/// assert_eq!(auth_error.to_string(), "Authentication failed: Invalid token");
///
/// let invalid = Error::InvalidResponse;
/// assert_eq!(invalid.to_string(), "Invalid response format");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Authentication failed with the platform.
    ///
    /// This error indicates that the provided credentials are invalid, expired,
    /// or that a client could not be created from them.
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// Failed to fetch the pull request.
    ///
    /// The pull request could not be retrieved from the platform. This usually
    /// means the pull request does not exist, the token cannot see the
    /// repository, or the platform returned an error status.
    ///
    /// Parameters: repository owner, repository name, pull request number
    #[error("Failed to fetch pull request {0}/{1}#{2}")]
    FailedToFetchPullRequest(String, String, u64),

    /// Invalid response format from platform API.
    ///
    /// The response received from the developer platform API was not in the
    /// expected format, for instance because required fields were missing.
    #[error("Invalid response format")]
    InvalidResponse,
}
