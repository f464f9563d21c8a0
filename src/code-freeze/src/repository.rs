//! Target repository reference and remote URL construction.

use thiserror::Error;
use url::Url;

/// Owner and name used when none are given on the command line.
pub const DEFAULT_REPOSITORY: &str = "woocommerce";

/// Host serving both the git remote and the REST API.
pub const DEFAULT_HOST: &str = "github.com";

/// Errors that can occur while building a repository reference.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Owner or name was blank.
    #[error("Repository {field} must not be empty")]
    EmptyField { field: &'static str },

    /// Host could not form a valid URL.
    #[error("Invalid repository host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL does not accept a path or credentials.
    #[error("Cannot build a remote URL for host '{host}'")]
    UnsupportedHost { host: String },
}

/// A repository on the hosting service, addressed as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    owner: String,
    name: String,
    host: String,
}

impl RepositoryRef {
    /// Creates a reference on [`DEFAULT_HOST`].
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::EmptyField`] if `owner` or `name` is blank.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, RepositoryError> {
        let owner = owner.into();
        let name = name.into();
        if owner.trim().is_empty() {
            return Err(RepositoryError::EmptyField { field: "owner" });
        }
        if name.trim().is_empty() {
            return Err(RepositoryError::EmptyField { field: "name" });
        }
        Ok(Self {
            owner,
            name,
            host: DEFAULT_HOST.to_string(),
        })
    }

    /// Points the reference at a different host (e.g. a GitHub Enterprise instance).
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Git host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Full repository name in "owner/name" format.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Remote URL without credentials, safe to log.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not form a valid URL.
    pub fn display_url(&self) -> Result<Url, RepositoryError> {
        let mut url =
            Url::parse(&format!("https://{}", self.host)).map_err(|source| {
                RepositoryError::InvalidHost {
                    host: self.host.clone(),
                    source,
                }
            })?;
        url.path_segments_mut()
            .map_err(|()| self.unsupported())?
            .clear()
            .push(&self.owner)
            .push(&self.name);
        Ok(url)
    }

    /// Authenticated clone URL: `https://{owner}:{token}@{host}/{owner}/{name}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not form a valid URL.
    pub fn clone_url(&self, token: &str) -> Result<Url, RepositoryError> {
        let mut url = self.display_url()?;
        url.set_username(&self.owner)
            .map_err(|()| self.unsupported())?;
        url.set_password(Some(token))
            .map_err(|()| self.unsupported())?;
        Ok(url)
    }

    fn unsupported(&self) -> RepositoryError {
        RepositoryError::UnsupportedHost {
            host: self.host.clone(),
        }
    }
}
