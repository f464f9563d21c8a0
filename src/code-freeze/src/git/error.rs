//! Version-control error types and output normalization.

use std::process::Output;
use thiserror::Error;

/// Errors that can occur while running version-control commands.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be started.
    #[error("Failed to execute {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// git ran but reported a failure.
    #[error("{command} failed: {detail}")]
    Command { command: String, detail: String },
}

impl GitError {
    /// The tool-specific message reported by git, if git got far enough to report one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Command { detail, .. } => Some(detail),
            Self::Spawn { .. } => None,
        }
    }
}

/// Turns a finished git process into a result.
///
/// A non-zero exit becomes [`GitError::Command`] carrying git's own message:
/// trimmed stderr, else stdout, else the exit status. Every entry of
/// `secrets` is scrubbed from the message.
pub(crate) fn normalize(
    command: &str,
    output: Output,
    secrets: &[&str],
) -> Result<Output, GitError> {
    if output.status.success() {
        return Ok(output);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let detail = if !stderr.trim().is_empty() {
        stderr.trim().to_string()
    } else if !stdout.trim().is_empty() {
        stdout.trim().to_string()
    } else {
        format!("exited with {}", output.status)
    };

    Err(GitError::Command {
        command: command.to_string(),
        detail: scrub(&detail, secrets),
    })
}

/// Replaces every occurrence of each non-empty secret with `***`.
fn scrub(text: &str, secrets: &[&str]) -> String {
    secrets
        .iter()
        .filter(|secret| !secret.is_empty())
        .fold(text.to_string(), |text, secret| text.replace(secret, "***"))
}
