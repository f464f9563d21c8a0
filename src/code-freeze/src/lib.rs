#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod git;
pub mod manifest;
pub mod pull_requests;
pub mod repository;
pub mod templates;
pub mod version_bump;

pub use config::{resolve_token, ConfigError, ReleaseSettings, TOKEN_ENV};
pub use git::{GitCli, GitError, VersionControl};
pub use manifest::{bump_version_line, patch_manifest, PatchOutcome};
pub use pull_requests::{
    CreatedPullRequest, GitHubPullRequests, PrError, PullRequestRequest, PullRequestSubmitter,
};
pub use repository::{RepositoryError, RepositoryRef};
pub use templates::{ReleaseNames, TemplateError, TemplateRenderer};
pub use version_bump::{VersionBump, VersionBumpConfig, VersionBumpError, VersionBumpReport};
