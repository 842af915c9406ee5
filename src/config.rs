//! Run configuration
//!
//! Built once at startup and passed by reference; nothing here is mutated
//! after construction.

use crate::error::{Error, Result};
use crate::types::PlatformConfig;
use std::path::PathBuf;

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default output file
pub const DEFAULT_OUTPUT: &str = "CHANGELOG.md";

/// Everything a changelog run needs
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    /// Repository and API endpoint
    pub platform: PlatformConfig,
    /// Resolved API token
    pub token: String,
    /// Where the rendered changelog goes
    pub output: PathBuf,
    /// Print instead of writing the output file
    pub dry_run: bool,
}

/// Parse an `owner/name` repository identifier.
///
/// Surrounding whitespace and a trailing `.git` are tolerated; the API URL
/// loses any trailing slash.
pub fn parse_repo_slug(slug: &str, api_url: &str) -> Result<PlatformConfig> {
    let trimmed = slug.trim();
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    let Some((owner, repo)) = trimmed.split_once('/') else {
        return Err(Error::InvalidRepo(slug.to_string()));
    };

    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return Err(Error::InvalidRepo(slug.to_string()));
    }

    Ok(PlatformConfig {
        owner: owner.to_string(),
        repo: repo.to_string(),
        api_url: api_url.trim_end_matches('/').to_string(),
    })
}
