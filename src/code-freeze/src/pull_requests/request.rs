//! Pull request payload and result.

/// Everything needed to open one pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRequest {
    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// PR title.
    pub title: String,

    /// PR body.
    pub body: String,

    /// Branch with the changes.
    pub head: String,

    /// Branch the changes merge into.
    pub base: String,
}

/// A pull request the hosting service accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPullRequest {
    /// PR number.
    pub number: u64,

    /// Browser URL of the PR.
    pub url: String,
}
