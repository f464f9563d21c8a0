//! Release settings and credential loading.
//!
//! Release-specific values (target version, branch names, commit and pull
//! request text, manifest location) live in [`ReleaseSettings`], loaded from
//! an optional `release.toml`. The access token comes from the environment.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{
    default_base_branch, default_branch_name_format, default_commit_title_format,
    default_next_version, default_pr_body_format, default_pr_title_format, ReleaseSettings,
};

use bstr::ByteSlice;
use std::path::Path;

/// Environment variable holding the hosting service access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Reads the access token from [`TOKEN_ENV`].
///
/// # Errors
///
/// Returns [`ConfigError::MissingToken`] if the variable is unset or blank.
pub fn resolve_token() -> Result<String, ConfigError> {
    match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(ConfigError::MissingToken { name: TOKEN_ENV }),
    }
}

/// Checks that `name` is usable as a git branch name.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationError`] naming `field` if git would reject it.
pub fn validate_branch_name(name: &str, field: &str, origin: &Path) -> Result<(), ConfigError> {
    gix_validate::reference::name_partial(name.as_bytes().as_bstr())
        .map(|_| ())
        .map_err(|e| ConfigError::ValidationError {
            path: origin.display().to_string(),
            message: format!("{field} '{name}' is not a valid branch name: {e}"),
        })
}
