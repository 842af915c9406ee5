//! Shared command context
//!
//! Resolves credentials and repository coordinates once, before any network
//! call, and builds the pull request source.

use super::generate::GenerateOptions;
use pr_changelog::auth::get_github_auth;
use pr_changelog::config::{ChangelogConfig, parse_repo_slug};
use pr_changelog::error::Result;
use pr_changelog::platform::{GitHubService, PullRequestSource};

/// Everything a command needs after startup validation
pub struct CommandContext {
    /// Immutable run configuration
    pub config: ChangelogConfig,
    /// Pull request source (GitHub)
    pub source: Box<dyn PullRequestSource>,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// Fails without touching the network if no token can be resolved or the
    /// repository identifier is malformed.
    pub fn new(options: &GenerateOptions) -> Result<Self> {
        let auth = get_github_auth(&options.token_env, |name| std::env::var(name).ok())?;
        let platform = parse_repo_slug(&options.repo, &options.api_url)?;

        let config = ChangelogConfig {
            platform,
            token: auth.token,
            output: options.output.clone(),
            dry_run: options.dry_run,
        };

        let source = GitHubService::new(&config.token, config.platform.clone())?;

        Ok(Self {
            config,
            source: Box::new(source),
        })
    }
}
