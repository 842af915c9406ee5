//! Pull request sources
//!
//! The changelog pipeline only needs one thing from the hosting platform:
//! the full list of closed pull requests for a repository.

mod github;

pub use github::{GitHubService, PER_PAGE, parse_next_link};

use crate::error::Result;
use crate::types::{PlatformConfig, PullRequest};
use async_trait::async_trait;
use tracing::debug;

/// Source of pull request metadata
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// List every closed pull request, merged or not, across all pages
    async fn list_closed_pull_requests(&self) -> Result<Vec<PullRequest>>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}

/// Fetch the merged pull requests of a repository.
///
/// Order follows the pages as the platform returned them and is not
/// guaranteed to be chronological. Any fetch failure aborts the whole call.
pub async fn fetch_merged_pull_requests(
    source: &dyn PullRequestSource,
) -> Result<Vec<PullRequest>> {
    let closed = source.list_closed_pull_requests().await?;
    let total = closed.len();

    let merged: Vec<PullRequest> = closed.into_iter().filter(PullRequest::is_merged).collect();

    debug!(
        repo = %source.config().slug(),
        total,
        merged = merged.len(),
        "fetched pull requests"
    );
    Ok(merged)
}
