//! Shared test fixtures

#![allow(dead_code)]

mod mock_source;

pub use mock_source::MockPullRequestSource;

use pr_changelog::types::{PlatformConfig, PullRequest};

/// Repository config used across tests
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        owner: "octo".to_string(),
        repo: "widgets".to_string(),
        api_url: "https://api.github.com".to_string(),
    }
}

/// A merged pull request
pub fn merged_pr(number: u64, title: &str, merged_at: &str, labels: &[&str]) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        merged_at: Some(merged_at.to_string()),
        labels: labels.iter().map(ToString::to_string).collect(),
    }
}

/// A pull request closed without merging
pub fn closed_pr(number: u64, title: &str, labels: &[&str]) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        merged_at: None,
        labels: labels.iter().map(ToString::to_string).collect(),
    }
}

/// The wire JSON GitHub returns for a pull request
pub fn pr_json(number: u64, title: &str, merged_at: Option<&str>, labels: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "number": number,
        "title": title,
        "state": "closed",
        "merged_at": merged_at,
        "html_url": format!("https://github.com/octo/widgets/pull/{number}"),
        "labels": labels
            .iter()
            .enumerate()
            .map(|(i, name)| serde_json::json!({ "id": i, "name": name, "color": "ededed" }))
            .collect::<Vec<_>>(),
    })
}
