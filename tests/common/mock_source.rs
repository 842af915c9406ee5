//! Mock pull request source for testing

#![allow(dead_code)]

use async_trait::async_trait;
use pr_changelog::error::{Error, Result};
use pr_changelog::platform::PullRequestSource;
use pr_changelog::types::{PlatformConfig, PullRequest};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory `PullRequestSource`
///
/// Features:
/// - Configurable pull request list
/// - Call counting for verification
/// - Error injection for failure path testing
pub struct MockPullRequestSource {
    config: PlatformConfig,
    pull_requests: Mutex<Vec<PullRequest>>,
    list_calls: AtomicUsize,
    error_on_list: Mutex<Option<String>>,
}

impl MockPullRequestSource {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            pull_requests: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
            error_on_list: Mutex::new(None),
        }
    }

    /// Set the pull requests returned by `list_closed_pull_requests`
    pub fn set_pull_requests(&self, prs: Vec<PullRequest>) {
        *self.pull_requests.lock().unwrap() = prs;
    }

    /// Make `list_closed_pull_requests` return an error
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Number of `list_closed_pull_requests` calls so far
    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PullRequestSource for MockPullRequestSource {
    async fn list_closed_pull_requests(&self) -> Result<Vec<PullRequest>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(msg) = self.error_on_list.lock().unwrap().clone() {
            return Err(Error::GitHubApi(msg));
        }

        Ok(self.pull_requests.lock().unwrap().clone())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
