//! Version bump error types.

/// Errors that abort a version bump.
#[derive(Debug, thiserror::Error)]
pub enum VersionBumpError {
    /// Settings or credentials are invalid.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The repository reference could not form a remote URL.
    #[error(transparent)]
    Repository(#[from] crate::repository::RepositoryError),

    /// A release text format failed to render.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),

    /// A version-control step failed.
    #[error(transparent)]
    Git(#[from] crate::git::GitError),

    /// The pull request could not be created.
    #[error(transparent)]
    PullRequest(#[from] crate::pull_requests::PrError),

    /// The temporary directory for the clone could not be created.
    #[error("Failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
}
