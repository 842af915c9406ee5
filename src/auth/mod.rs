//! Authentication for GitHub
//!
//! Tokens come from the environment: a configurable variable first, then
//! `GITHUB_TOKEN`.

mod github;

pub use github::{DEFAULT_TOKEN_ENV, FALLBACK_TOKEN_ENV, GitHubAuthConfig, get_github_auth};

/// Source of authentication token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the configured environment variable
    EnvVar(String),
    /// Token from the `GITHUB_TOKEN` fallback
    Fallback,
}
