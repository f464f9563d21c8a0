//! Pull request creation.
//!
//! [`PullRequestSubmitter`] is the seam the version-bump routine calls;
//! [`GitHubPullRequests`] sends the request through octocrab.

mod error;
mod request;

pub use error::PrError;
pub use request::{CreatedPullRequest, PullRequestRequest};

use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::{debug, info, info_span, Instrument};

/// Opens pull requests on a hosting service.
#[async_trait]
pub trait PullRequestSubmitter: Send + Sync {
    /// Opens a pull request, issuing exactly one create call.
    async fn submit(&self, request: &PullRequestRequest) -> Result<CreatedPullRequest, PrError>;
}

/// [`PullRequestSubmitter`] for GitHub's REST API.
pub struct GitHubPullRequests {
    octocrab: Octocrab,
}

impl GitHubPullRequests {
    /// Builds an authenticated client.
    ///
    /// `base_uri` points the client at GitHub Enterprise or a test server;
    /// octocrab's default (`https://api.github.com`) is used when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`PrError`] if the base URI is invalid or the client can't be built.
    pub fn new(token: &str, base_uri: Option<&str>) -> Result<Self, PrError> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(uri) = base_uri {
            builder = builder
                .base_uri(uri)
                .map_err(|e| PrError::InvalidBaseUri {
                    url: uri.to_string(),
                    message: e.to_string(),
                })?;
        }
        Ok(Self {
            octocrab: builder.build()?,
        })
    }
}

#[async_trait]
impl PullRequestSubmitter for GitHubPullRequests {
    /// Sends `POST /repos/{owner}/{repo}/pulls`.
    async fn submit(&self, request: &PullRequestRequest) -> Result<CreatedPullRequest, PrError> {
        let span = info_span!(
            "create_pr",
            repo = %format!("{}/{}", request.owner, request.repo),
            head = %request.head,
            base = %request.base
        );

        async {
            debug!(title = %request.title, "Sending pull request");
            let pr = self
                .octocrab
                .pulls(&request.owner, &request.repo)
                .create(&request.title, &request.head, &request.base)
                .body(&request.body)
                .send()
                .await?;

            let url = pr.html_url.as_ref().map_or_else(
                || {
                    format!(
                        "https://github.com/{}/{}/pull/{}",
                        request.owner, request.repo, pr.number
                    )
                },
                ToString::to_string,
            );

            info!(pr_number = pr.number, url = %url, "PR created successfully");
            Ok(CreatedPullRequest {
                number: pr.number,
                url,
            })
        }
        .instrument(span)
        .await
    }
}
