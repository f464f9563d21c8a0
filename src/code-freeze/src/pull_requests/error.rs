//! Pull request error types.

use thiserror::Error;

/// Errors that can occur while opening a pull request.
#[derive(Debug, Error)]
pub enum PrError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The configured API base URL was rejected.
    #[error("Invalid API base URL '{url}': {message}")]
    InvalidBaseUri { url: String, message: String },
}
