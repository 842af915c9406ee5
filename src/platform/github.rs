//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PullRequestSource;
use crate::types::{PlatformConfig, PullRequest};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use reqwest::header::LINK;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

/// Page size requested from the list endpoint (GitHub's maximum)
pub const PER_PAGE: u32 = 100;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

static NEXT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([^>]+)>\s*;\s*rel="next""#).expect("next-link pattern is valid")
});

#[derive(Deserialize)]
struct ApiPullRequest {
    number: u64,
    #[serde(default)]
    title: String,
    merged_at: Option<String>,
    #[serde(default)]
    labels: Vec<ApiLabel>,
}

#[derive(Deserialize)]
struct ApiLabel {
    name: String,
}

/// GitHub's JSON error body
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl From<ApiPullRequest> for PullRequest {
    fn from(pr: ApiPullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title,
            merged_at: pr.merged_at,
            labels: pr.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

/// Extract the `rel="next"` target from a `Link` header value
pub fn parse_next_link(header: &str) -> Option<String> {
    NEXT_LINK
        .captures(header)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// GitHub service using reqwest
pub struct GitHubService {
    http_client: Client,
    token: String,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, config: PlatformConfig) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            token: token.to_string(),
            config,
        })
    }

    /// URL of the first page of closed pull requests
    fn first_page_url(&self) -> Result<Url> {
        let raw = format!(
            "{}/repos/{}/{}/pulls",
            self.config.api_url, self.config.owner, self.config.repo
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| Error::GitHubApi(format!("invalid API URL '{raw}': {e}")))?;
        url.query_pairs_mut()
            .append_pair("state", "closed")
            .append_pair("per_page", &PER_PAGE.to_string());
        Ok(url)
    }

    /// Fetch one page, returning its pull requests and the next page URL
    async fn fetch_page(&self, url: &str) -> Result<(Vec<PullRequest>, Option<String>)> {
        let response = self
            .http_client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map_or_else(|_| body.trim().to_string(), |b| b.message);
            return Err(Error::GitHubApi(if detail.is_empty() {
                format!("GET {url} returned {status}")
            } else {
                format!("GET {url} returned {status}: {detail}")
            }));
        }

        let next = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_next_link);

        let prs: Vec<ApiPullRequest> = response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("failed to parse pull requests: {e}")))?;

        Ok((prs.into_iter().map(Into::into).collect(), next))
    }
}

#[async_trait]
impl PullRequestSource for GitHubService {
    async fn list_closed_pull_requests(&self) -> Result<Vec<PullRequest>> {
        let mut next = Some(self.first_page_url()?.to_string());
        let mut result = Vec::new();
        let mut page = 0_usize;

        while let Some(url) = next {
            page += 1;
            debug!(page, %url, "fetching pull request page");
            let (prs, following) = self.fetch_page(&url).await?;
            debug!(page, count = prs.len(), "fetched pull request page");
            result.extend(prs);
            next = following;
        }

        Ok(result)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_next_link_among_relations() {
        let header = r#"<https://api.github.com/repositories/1/pulls?state=closed&per_page=100&page=2>; rel="next", <https://api.github.com/repositories/1/pulls?state=closed&per_page=100&page=5>; rel="last""#;
        assert_eq!(
            parse_next_link(header).as_deref(),
            Some("https://api.github.com/repositories/1/pulls?state=closed&per_page=100&page=2")
        );
    }

    #[test]
    fn test_parse_next_link_not_first() {
        let header = r#"<https://x/p?page=1>; rel="prev", <https://x/p?page=3>; rel="next""#;
        assert_eq!(parse_next_link(header).as_deref(), Some("https://x/p?page=3"));
    }

    #[test]
    fn test_parse_next_link_absent_on_last_page() {
        let header = r#"<https://x/p?page=1>; rel="first", <https://x/p?page=4>; rel="prev""#;
        assert_eq!(parse_next_link(header), None);
    }

    #[test]
    fn test_first_page_url() {
        let config = PlatformConfig {
            owner: "octo".to_string(),
            repo: "widgets".to_string(),
            api_url: "https://api.github.com".to_string(),
        };
        let service = GitHubService::new("t", config).unwrap();
        assert_eq!(
            service.first_page_url().unwrap().as_str(),
            "https://api.github.com/repos/octo/widgets/pulls?state=closed&per_page=100"
        );
    }

    #[test]
    fn test_wire_pull_request_conversion() {
        let json = r#"{
            "number": 7,
            "title": "feat: thing",
            "merged_at": null,
            "state": "closed",
            "labels": [{"id": 1, "name": "New Features"}, {"id": 2, "name": "API Changes"}]
        }"#;
        let wire: ApiPullRequest = serde_json::from_str(json).unwrap();
        let pr: PullRequest = wire.into();
        assert_eq!(pr.number, 7);
        assert!(!pr.is_merged());
        assert_eq!(pr.labels, vec!["New Features", "API Changes"]);
    }
}
