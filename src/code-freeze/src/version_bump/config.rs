//! Version bump configuration.

use crate::config::ReleaseSettings;
use crate::repository::RepositoryRef;
use std::fmt;

/// Configuration for one version bump run.
#[derive(Clone)]
pub struct VersionBumpConfig {
    /// Repository to bump.
    repository: RepositoryRef,
    /// Token used for the clone URL and API calls.
    token: String,
    /// Release-cycle values.
    settings: ReleaseSettings,
    /// Whether to stop after the local commit.
    dry_run: bool,
    /// Whether to delete the clone when the run ends.
    cleanup: bool,
    /// Shallow clone depth.
    clone_depth: Option<u32>,
}

impl VersionBumpConfig {
    /// Creates a configuration that keeps the clone and runs every step.
    pub fn new(repository: RepositoryRef, token: String, settings: ReleaseSettings) -> Self {
        Self {
            repository,
            token,
            settings,
            dry_run: false,
            cleanup: false,
            clone_depth: None,
        }
    }

    /// Stops after committing locally; nothing is pushed or opened.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Deletes the temporary clone when the run ends. Ignored for dry runs.
    #[must_use]
    pub fn with_cleanup(mut self, cleanup: bool) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Clones only the last `depth` commits.
    #[must_use]
    pub fn with_clone_depth(mut self, depth: Option<u32>) -> Self {
        self.clone_depth = depth;
        self
    }

    /// Returns the target repository.
    pub fn repository(&self) -> &RepositoryRef {
        &self.repository
    }

    /// Returns the access token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the release settings.
    pub fn settings(&self) -> &ReleaseSettings {
        &self.settings
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns whether the clone is removed after the run.
    pub fn cleanup(&self) -> bool {
        self.cleanup && !self.dry_run
    }

    /// Returns the shallow clone depth.
    pub fn clone_depth(&self) -> Option<u32> {
        self.clone_depth
    }
}

impl fmt::Debug for VersionBumpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionBumpConfig")
            .field("repository", &self.repository)
            .field("token", &"***")
            .field("settings", &self.settings)
            .field("dry_run", &self.dry_run)
            .field("cleanup", &self.cleanup)
            .field("clone_depth", &self.clone_depth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> VersionBumpConfig {
        VersionBumpConfig::new(
            RepositoryRef::new("acme", "widget").unwrap(),
            "ghp_secret".to_string(),
            ReleaseSettings::default(),
        )
    }

    #[test]
    fn debug_hides_token() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn dry_run_never_cleans_up() {
        let config = config().with_cleanup(true).with_dry_run(true);
        assert!(!config.cleanup());

        let config = config.with_dry_run(false);
        assert!(config.cleanup());
    }
}
