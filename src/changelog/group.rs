//! Grouping merged pull requests by month and category

use super::labels::{SKIP_LABEL, category_for_label};
use crate::error::{Error, Result};
use crate::types::{Category, ChangelogEntry, MonthKey, PullRequest};
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Format of `merged_at` as returned by the GitHub REST API
const MERGED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Changelog entries keyed by merge month, then category
///
/// Entries keep insertion order within a category and may contain the same
/// pull request more than once; rendering removes those duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedChangelog {
    months: BTreeMap<MonthKey, HashMap<Category, Vec<ChangelogEntry>>>,
}

impl GroupedChangelog {
    /// Create an empty changelog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to a month's category
    pub fn push(&mut self, month: MonthKey, category: Category, entry: ChangelogEntry) {
        self.months
            .entry(month)
            .or_default()
            .entry(category)
            .or_default()
            .push(entry);
    }

    /// Whether no entries were recorded
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Months with at least one entry, newest first
    pub fn months_newest_first(&self) -> impl Iterator<Item = MonthKey> + '_ {
        self.months.keys().rev().copied()
    }

    /// Entries recorded for a month and category, in insertion order
    pub fn entries(&self, month: MonthKey, category: Category) -> &[ChangelogEntry] {
        self.months
            .get(&month)
            .and_then(|categories| categories.get(&category))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Group merged pull requests into a [`GroupedChangelog`].
///
/// Unmerged pull requests and those labeled [`SKIP_LABEL`] are dropped. A pull
/// request lands in every category its labels map to, but adds at most one
/// entry to Documentation Changes however many documentation labels it has.
/// Two different pull requests with the same title are kept apart.
///
/// Fails on the first `merged_at` that does not match `YYYY-MM-DDTHH:MM:SSZ`.
pub fn group_pull_requests(prs: &[PullRequest]) -> Result<GroupedChangelog> {
    let mut grouped = GroupedChangelog::new();

    for pr in prs {
        let Some(merged_at) = pr.merged_at.as_deref() else {
            continue;
        };

        let merged = NaiveDateTime::parse_from_str(merged_at, MERGED_AT_FORMAT).map_err(
            |source| Error::InvalidTimestamp {
                number: pr.number,
                value: merged_at.to_string(),
                source,
            },
        )?;
        let month = MonthKey::of(merged.date());

        // Sorted so fan-out order does not depend on label order from the API
        let labels: BTreeSet<&str> = pr.labels.iter().map(String::as_str).collect();
        if labels.contains(SKIP_LABEL) {
            debug!(pr_number = pr.number, "skipping PR labeled {SKIP_LABEL}");
            continue;
        }

        let title = pr.cleaned_title();
        let mut documented = false;

        for category in labels.into_iter().filter_map(category_for_label) {
            if category == Category::DocumentationChanges {
                if documented {
                    continue;
                }
                documented = true;
            }
            grouped.push(
                month,
                category,
                ChangelogEntry {
                    number: pr.number,
                    title: title.to_string(),
                },
            );
        }
    }

    debug!(months = grouped.months.len(), "grouped pull requests");
    Ok(grouped)
}
