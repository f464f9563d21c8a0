//! [`VersionControl`] backed by the `git` command-line client.

use super::error::{normalize, GitError};
use super::VersionControl;
use async_trait::async_trait;
use std::fmt;
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::debug;
use url::Url;

/// Config applied to every invocation so hooks inside the clone never run.
const HOOKS_DISABLED: (&str, &str) = ("core.hooksPath", "/dev/null");

/// Runs `git` as a child process.
///
/// Every command is prefixed with `-c key=value` for each configured pair.
/// `core.hooksPath=/dev/null` is always present.
#[derive(Clone)]
pub struct GitCli {
    config: Vec<(String, String)>,
    clone_depth: Option<u32>,
    secret: Option<String>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GitCli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitCli")
            .field("config", &self.config)
            .field("clone_depth", &self.clone_depth)
            .field("secret", &self.secret.as_ref().map(|_| "***"))
            .finish()
    }
}

impl GitCli {
    /// Creates a client with hooks disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: vec![(HOOKS_DISABLED.0.to_string(), HOOKS_DISABLED.1.to_string())],
            clone_depth: None,
            secret: None,
        }
    }

    /// Adds a `-c key=value` pair to every command.
    #[must_use]
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.push((key.into(), value.into()));
        self
    }

    /// Sets the identity recorded on commits.
    #[must_use]
    pub fn with_committer(self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.with_config("user.name", name)
            .with_config("user.email", email)
    }

    /// Makes clones shallow.
    #[must_use]
    pub fn with_clone_depth(mut self, depth: u32) -> Self {
        self.clone_depth = Some(depth);
        self
    }

    /// Masks `secret` in every error this client reports.
    ///
    /// The remote URL stored by clone carries the token, so later commands
    /// such as push can echo it back.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Config pairs passed to every command.
    pub fn config(&self) -> &[(String, String)] {
        &self.config
    }

    fn command(&self, cwd: Option<&Path>) -> Command {
        let mut command = Command::new("git");
        for (key, value) in &self.config {
            command.arg("-c").arg(format!("{key}={value}"));
        }
        if let Some(cwd) = cwd {
            command.current_dir(cwd);
        }
        command
            // Fail on bad credentials instead of waiting for input.
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }

    async fn run(
        &self,
        cwd: Option<&Path>,
        args: &[&str],
        label: &str,
        secret: Option<&str>,
    ) -> Result<Output, GitError> {
        debug!(command = %label, "Running git");
        let output = self
            .command(cwd)
            .args(args)
            .output()
            .await
            .map_err(|source| GitError::Spawn {
                command: label.to_string(),
                source,
            })?;
        let secrets: Vec<&str> = secret
            .into_iter()
            .chain(self.secret.as_deref())
            .collect();
        normalize(label, output, &secrets)
    }
}

#[async_trait]
impl VersionControl for GitCli {
    async fn clone_repository(
        &self,
        url: &Url,
        dest: &Path,
        branch: &str,
    ) -> Result<(), GitError> {
        let mut shown = url.clone();
        let _ = shown.set_password(None);
        let dest_str = dest.to_string_lossy();
        let label = format!("git clone --branch {branch} {shown} {dest_str}");

        let depth = self.clone_depth.map(|d| d.to_string());
        let mut args = vec!["clone", "--branch", branch];
        if let Some(depth) = &depth {
            args.extend(["--depth", depth.as_str()]);
        }
        args.extend(["--", url.as_str(), dest_str.as_ref()]);

        self.run(None, &args, &label, url.password()).await?;
        Ok(())
    }

    async fn checkout_branch(&self, repo: &Path, branch: &str, base: &str) -> Result<(), GitError> {
        let label = format!("git checkout -b {branch} {base}");
        self.run(Some(repo), &["checkout", "-b", branch, base], &label, None)
            .await?;
        Ok(())
    }

    async fn add(&self, repo: &Path, path: &Path) -> Result<(), GitError> {
        let path = path.to_string_lossy();
        let label = format!("git add {path}");
        self.run(Some(repo), &["add", "--", path.as_ref()], &label, None)
            .await?;
        Ok(())
    }

    async fn commit(&self, repo: &Path, message: &str) -> Result<(), GitError> {
        self.run(Some(repo), &["commit", "-m", message], "git commit", None)
            .await?;
        Ok(())
    }

    async fn push(&self, repo: &Path, remote: &str, branch: &str) -> Result<(), GitError> {
        let label = format!("git push {remote} {branch}");
        self.run(Some(repo), &["push", remote, branch], &label, None)
            .await?;
        Ok(())
    }
}
