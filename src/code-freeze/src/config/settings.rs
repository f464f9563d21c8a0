//! Release settings deserialization and validation.

use super::{validate_branch_name, ConfigError};
use crate::manifest::DEFAULT_MANIFEST_PATH;
use crate::repository::DEFAULT_HOST;
use serde::Deserialize;
use std::path::{Component, Path};
use tracing::debug;
use url::Url;

/// Values that change from one release cycle to the next.
///
/// Every key is optional in `release.toml`; missing keys take the defaults
/// below. The `*-format` keys are Handlebars templates with `version`,
/// `owner`, `name` and `base` in scope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ReleaseSettings {
    /// Version written into the manifest and templates (default `XX.XX`).
    pub next_version: String,

    /// Branch the new branch starts from and the PR targets (default `trunk`).
    pub base_branch: String,

    /// Handlebars format for the new branch name.
    pub branch_name_format: String,

    /// Handlebars format for the commit message.
    pub commit_title_format: String,

    /// Handlebars format for the PR title.
    pub pr_title_format: String,

    /// Handlebars format for the PR body.
    pub pr_body_format: String,

    /// Manifest path relative to the clone root.
    pub manifest_path: String,

    /// Remote the branch is pushed to.
    pub remote: String,

    /// Git host used for the clone URL.
    pub host: String,

    /// REST API base URL; octocrab's default when unset.
    pub api_base_url: Option<String>,

    /// Commit author name; git's own config when unset.
    pub committer_name: Option<String>,

    /// Commit author email; git's own config when unset.
    pub committer_email: Option<String>,
}

pub fn default_next_version() -> String {
    "XX.XX".to_string()
}

pub fn default_base_branch() -> String {
    "trunk".to_string()
}

pub fn default_branch_name_format() -> String {
    "prep/trunk-for-next-dev-cycle-{{version}}".to_string()
}

pub fn default_commit_title_format() -> String {
    "Prep trunk for {{version}} cycle".to_string()
}

pub fn default_pr_title_format() -> String {
    "Amazing new feature".to_string()
}

pub fn default_pr_body_format() -> String {
    "Please pull these awesome changes in!".to_string()
}

impl Default for ReleaseSettings {
    fn default() -> Self {
        Self {
            next_version: default_next_version(),
            base_branch: default_base_branch(),
            branch_name_format: default_branch_name_format(),
            commit_title_format: default_commit_title_format(),
            pr_title_format: default_pr_title_format(),
            pr_body_format: default_pr_body_format(),
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            remote: "origin".to_string(),
            host: DEFAULT_HOST.to_string(),
            api_base_url: None,
            committer_name: None,
            committer_email: None,
        }
    }
}

impl ReleaseSettings {
    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading release settings");
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Parses and validates settings from TOML text. `origin` labels errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if parsing or validation fails.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(contents).map_err(|e| ConfigError::TomlError {
            path: origin.display().to_string(),
            source: e,
        })?;
        settings.validate(origin)?;
        Ok(settings)
    }

    /// Checks the settings for values git or the API would reject.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem found.
    pub fn validate(&self, origin: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: origin.display().to_string(),
            message,
        };

        if self.next_version.trim().is_empty() {
            return Err(invalid("next-version must not be empty".to_string()));
        }
        if self.next_version.contains('\n') {
            return Err(invalid("next-version must be a single line".to_string()));
        }
        if self.remote.trim().is_empty() {
            return Err(invalid("remote must not be empty".to_string()));
        }
        validate_branch_name(&self.base_branch, "base-branch", origin)?;

        let manifest = Path::new(&self.manifest_path);
        if self.manifest_path.trim().is_empty() {
            return Err(invalid("manifest-path must not be empty".to_string()));
        }
        if manifest.is_absolute()
            || manifest
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(invalid(format!(
                "manifest-path must be relative to the clone root: {}",
                self.manifest_path
            )));
        }

        match Url::parse(&format!("https://{}", self.host)) {
            Ok(url) if url.host_str().is_some() && url.path() == "/" => {}
            _ => return Err(invalid(format!("host is not a valid host name: {}", self.host))),
        }

        if let Some(api) = &self.api_base_url {
            if Url::parse(api).is_err() {
                return Err(invalid(format!("api-base-url is not a valid URL: {api}")));
            }
        }

        if self.committer_name.is_some() != self.committer_email.is_some() {
            return Err(invalid(
                "committer-name and committer-email must be set together".to_string(),
            ));
        }

        Ok(())
    }

    /// Committer identity, when both halves are configured.
    pub fn committer(&self) -> Option<(&str, &str)> {
        self.committer_name
            .as_deref()
            .zip(self.committer_email.as_deref())
    }
}
