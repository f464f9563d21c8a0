//! Version-control operations on the local working copy.
//!
//! [`VersionControl`] is the seam the version-bump routine drives;
//! [`GitCli`] is the production implementation. Every failure is
//! normalized into a [`GitError`] carrying git's own message.

mod client;
mod error;

pub use client::GitCli;
pub use error::GitError;

use async_trait::async_trait;
use std::path::Path;
use url::Url;

/// Operations the version-bump routine needs from a version-control client.
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Clones `url` into `dest`, which must be empty or absent, with `branch`
    /// checked out locally.
    async fn clone_repository(
        &self,
        url: &Url,
        dest: &Path,
        branch: &str,
    ) -> Result<(), GitError>;

    /// Creates `branch` from `base` and checks it out.
    async fn checkout_branch(&self, repo: &Path, branch: &str, base: &str) -> Result<(), GitError>;

    /// Stages `path`, relative to the working copy root.
    async fn add(&self, repo: &Path, path: &Path) -> Result<(), GitError>;

    /// Commits staged changes.
    async fn commit(&self, repo: &Path, message: &str) -> Result<(), GitError>;

    /// Pushes `branch` to `remote`.
    async fn push(&self, repo: &Path, remote: &str, branch: &str) -> Result<(), GitError>;
}
