//! Changelog engine
//!
//! Pure grouping and rendering over already-fetched pull requests:
//! 1. Group - bucket entries by merge month and category (`group`)
//! 2. Render - emit Markdown in a fixed order (`render`)
//!
//! Writing the result is the only effectful step (`write_changelog`).

mod group;
mod labels;
mod render;

pub use group::{GroupedChangelog, group_pull_requests};
pub use labels::{CATEGORY_ORDER, SKIP_LABEL, category_for_label};
pub use render::{HEADER_INTRO, render_changelog};

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Write the rendered changelog, replacing any existing file.
pub fn write_changelog(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::Output(format!("failed to write {}: {e}", path.display())))
}
