//! Markdown rendering

use super::group::GroupedChangelog;
use super::labels::CATEGORY_ORDER;
use crate::types::ChangelogEntry;
use std::collections::HashSet;

/// Sentence under the document title
pub const HEADER_INTRO: &str = "This changelog is auto-generated from merged pull requests.";

/// Render a grouped changelog as Markdown.
///
/// Months run newest first, separated by a horizontal rule. Within a month,
/// categories follow [`CATEGORY_ORDER`] and empty ones are left out. Each
/// category lists a pull request at most once.
pub fn render_changelog(changelog: &GroupedChangelog) -> String {
    let mut lines: Vec<String> = vec![
        "# Changelog".to_string(),
        String::new(),
        HEADER_INTRO.to_string(),
        String::new(),
    ];

    for (index, month) in changelog.months_newest_first().enumerate() {
        if index > 0 {
            lines.push(String::new());
            lines.push("---".to_string());
            lines.push(String::new());
        }

        lines.push(format!("## {month}"));
        lines.push(String::new());

        for category in CATEGORY_ORDER {
            let entries = dedup_by_number(changelog.entries(month, category));
            if entries.is_empty() {
                continue;
            }

            lines.push(category.heading().to_string());
            lines.extend(entries.iter().map(ToString::to_string));
            lines.push(String::new());
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

/// First entry per pull request number, original order preserved
fn dedup_by_number(entries: &[ChangelogEntry]) -> Vec<&ChangelogEntry> {
    let mut seen = HashSet::new();
    entries.iter().filter(|e| seen.insert(e.number)).collect()
}
