//! Version bump report.

use crate::manifest::PatchOutcome;
use crate::pull_requests::CreatedPullRequest;
use std::path::PathBuf;

/// What a completed version bump did.
#[derive(Debug, Clone)]
pub struct VersionBumpReport {
    /// Repository full name.
    pub repository: String,

    /// Location of the clone, when it was kept.
    pub clone_path: Option<PathBuf>,

    /// Branch created for the bump.
    pub branch: String,

    /// Branch the PR targets.
    pub base: String,

    /// Manifest update result.
    pub manifest: PatchOutcome,

    /// The opened PR; `None` for dry runs.
    pub pull_request: Option<CreatedPullRequest>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl VersionBumpReport {
    /// Returns true if the run finished with something a human should look at.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        !self.manifest.is_replaced()
    }
}
