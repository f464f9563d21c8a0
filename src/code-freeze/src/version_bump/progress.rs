//! Start/end reporting around each step of a version bump.

use std::fmt;
use std::future::Future;
use std::time::Instant;
use tracing::{error, info, info_span, Instrument};

/// A step of the version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Cloning into a temporary directory.
    Clone,
    /// Creating the release branch.
    Branch,
    /// Rewriting the manifest version.
    Manifest,
    /// Staging and committing.
    Commit,
    /// Pushing the branch.
    Push,
    /// Opening the pull request.
    PullRequest,
}

impl Phase {
    /// Short machine-friendly name, used as the span field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clone => "clone",
            Self::Branch => "branch",
            Self::Manifest => "manifest",
            Self::Commit => "commit",
            Self::Push => "push",
            Self::PullRequest => "pull_request",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clone => "Making a temporary clone",
            Self::Branch => "Creating branch",
            Self::Manifest => "Updating plugin file",
            Self::Commit => "Adding and committing changes",
            Self::Push => "Pushing to GitHub",
            Self::PullRequest => "Creating a pull request",
        })
    }
}

/// Runs `step` inside a span for `phase`, logging its start, end and failure.
pub(crate) async fn track<T, E, F>(phase: Phase, step: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let span = info_span!("phase", phase = phase.name());
    async move {
        info!("{phase}");
        let started = Instant::now();
        match step.await {
            Ok(value) => {
                let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                info!(elapsed_ms, "{phase}: done");
                Ok(value)
            }
            Err(e) => {
                error!(error = %e, "{phase}: failed");
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}
