//! pr-changelog command-line entry point

mod cli;

use clap::Parser;
use pr_changelog::auth::DEFAULT_TOKEN_ENV;
use pr_changelog::config::{DEFAULT_API_URL, DEFAULT_OUTPUT};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate a changelog from GitHub pull requests
#[derive(Parser, Debug)]
#[command(name = "pr-changelog", version, about = "Generate a changelog from GitHub pull requests")]
struct Cli {
    /// GitHub repository (e.g., username/repository)
    #[arg(long, env = "CHANGELOG_REPO", default_value = "username/repository")]
    repo: String,

    /// Environment variable holding the GitHub token (falls back to `GITHUB_TOKEN`)
    #[arg(long, env = "CHANGELOG_TOKEN_ENV", default_value = DEFAULT_TOKEN_ENV)]
    token_env: String,

    /// Output changelog file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// GitHub REST API base URL (use `https://HOST/api/v3` for GitHub Enterprise)
    #[arg(long, env = "CHANGELOG_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Print the changelog to stdout instead of writing the output file
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    cli::run_generate(cli::GenerateOptions {
        repo: args.repo,
        token_env: args.token_env,
        output: args.output,
        api_url: args.api_url,
        dry_run: args.dry_run,
    })
    .await?;

    Ok(())
}
