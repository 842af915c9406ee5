//! Core types for pr-changelog

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A pull request as consumed by the changelog pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title, possibly carrying a `prefix: ` segment
    pub title: String,
    /// Merge timestamp (`YYYY-MM-DDTHH:MM:SSZ`), `None` if closed unmerged
    pub merged_at: Option<String>,
    /// Label names attached to the PR
    pub labels: Vec<String>,
}

impl PullRequest {
    /// Whether the PR was merged (as opposed to closed without merging)
    pub const fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    /// Title with a leading `prefix: ` segment removed
    ///
    /// Only the first `": "` separates the prefix; anything after it is kept
    /// verbatim. Titles without the separator are returned unchanged.
    pub fn cleaned_title(&self) -> &str {
        self.title
            .split_once(": ")
            .map_or(self.title.as_str(), |(_, rest)| rest)
    }
}

/// Display category a label is translated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// New user-facing features
    NewFeatures,
    /// Changes to the public API
    ApiChanges,
    /// Documentation content and structure
    DocumentationChanges,
    /// Updated examples
    ExampleUpdates,
    /// Deprecations
    Deprecated,
    /// Tooling behind the documentation site
    PlatformUpdates,
}

impl Category {
    /// Markdown heading line for this category
    pub const fn heading(self) -> &'static str {
        match self {
            Self::NewFeatures => "### ✨ New Features",
            Self::ApiChanges => "### 📚 API Changes",
            Self::DocumentationChanges => "### 📝 Documentation Changes",
            Self::ExampleUpdates => "### 📋 Example Updates",
            Self::Deprecated => "### 🗑 Deprecated",
            Self::PlatformUpdates => "### 🛠 Documentation Platform Updates",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.heading())
    }
}

/// Calendar month a pull request was merged in
///
/// Ordered chronologically; displayed as `March 2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    /// Month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        Self(date - Days::new(u64::from(date.day0())))
    }

    /// Month from a year and 1-based month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Calendar year
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month number (1-12)
    pub fn month(self) -> u32 {
        self.0.month()
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%B %Y"))
    }
}

/// One changelog bullet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    /// PR number the entry was derived from
    pub number: u64,
    /// Cleaned PR title
    pub title: String,
}

impl std::fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "- {} (#{})", self.title, self.number)
    }
}

/// Repository coordinates and API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// REST API base URL, without trailing slash
    pub api_url: String,
}

impl PlatformConfig {
    /// `owner/name` form of the repository
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
