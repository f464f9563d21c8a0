//! Release text rendering using Handlebars.
//!
//! Branch name, commit title and pull request text are format strings in
//! [`ReleaseSettings`](crate::config::ReleaseSettings) so they can change
//! with each release cycle.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

/// Names and text rendered for a single version bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNames {
    /// Branch created for the bump.
    pub branch: String,

    /// Branch the bump starts from and the PR targets.
    pub base: String,

    /// Commit message.
    pub commit_title: String,

    /// PR title.
    pub pr_title: String,

    /// PR body.
    pub pr_body: String,
}
