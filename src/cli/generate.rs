//! Generate command - fetch, group, render, write

use super::context::CommandContext;
use super::style::{Stylize, check, spinner_style};
use anstream::{eprintln, println};
use indicatif::ProgressBar;
use pr_changelog::changelog::{group_pull_requests, render_changelog, write_changelog};
use pr_changelog::error::Result;
use pr_changelog::platform::fetch_merged_pull_requests;
use std::path::PathBuf;
use std::time::Duration;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Repository as `owner/name`
    pub repo: String,
    /// Name of the environment variable holding the token
    pub token_env: String,
    /// Output file path
    pub output: PathBuf,
    /// REST API base URL
    pub api_url: String,
    /// Print instead of writing the output file
    pub dry_run: bool,
}

/// Run the generate command
pub async fn run_generate(options: GenerateOptions) -> Result<()> {
    let ctx = CommandContext::new(&options)?;
    let slug = ctx.config.platform.slug();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Fetching pull requests for {}...", slug.emphasis()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let prs = match fetch_merged_pull_requests(ctx.source.as_ref()).await {
        Ok(prs) => prs,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    spinner.finish_with_message(format!(
        "{} Fetched {} merged pull requests from {}",
        check(),
        prs.len().accent(),
        slug.emphasis()
    ));

    let grouped = group_pull_requests(&prs)?;
    if grouped.is_empty() {
        eprintln!(
            "{}",
            "No labeled pull requests found; the changelog will only contain its header.".muted()
        );
    }

    let markdown = render_changelog(&grouped);

    if ctx.config.dry_run {
        std::print!("{markdown}");
        return Ok(());
    }

    write_changelog(&ctx.config.output, &markdown)?;

    println!(
        "{} Changelog generated: {}",
        check(),
        ctx.config.output.display().accent()
    );

    Ok(())
}
