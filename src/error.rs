//! Error types for pr-changelog

use thiserror::Error;

/// Errors that can abort a changelog run
#[derive(Debug, Error)]
pub enum Error {
    /// No token could be resolved from the environment
    #[error("{0}")]
    Auth(String),

    /// Repository identifier is not of the form `owner/name`
    #[error("invalid repository '{0}': expected owner/name")]
    InvalidRepo(String),

    /// GitHub answered with a non-success status or an unreadable body
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A pull request carried a merge timestamp in an unexpected format
    #[error("pull request #{number} has invalid merged_at '{value}': {source}")]
    InvalidTimestamp {
        /// Pull request number
        number: u64,
        /// Raw timestamp as received
        value: String,
        /// Underlying parse failure
        #[source]
        source: chrono::ParseError,
    },

    /// The changelog could not be written
    #[error("output error: {0}")]
    Output(String),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
