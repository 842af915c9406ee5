//! GitHub token resolution

use super::AuthSource;
use crate::error::{Error, Result};
use tracing::debug;

/// Variable consulted first when no other name is configured
pub const DEFAULT_TOKEN_ENV: &str = "CHANGELOG_TOKEN";

/// Variable consulted when the configured one is unset or empty
pub const FALLBACK_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Resolved GitHub credentials
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// API token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

/// Resolve a GitHub token.
///
/// `lookup` maps a variable name to its value; the binary passes
/// `std::env::var`. Empty values count as unset.
pub fn get_github_auth<F>(token_env: &str, lookup: F) -> Result<GitHubAuthConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(token) = non_empty(token_env) {
        debug!(var = token_env, "using token from configured variable");
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::EnvVar(token_env.to_string()),
        });
    }

    if let Some(token) = non_empty(FALLBACK_TOKEN_ENV) {
        debug!(var = FALLBACK_TOKEN_ENV, "using fallback token");
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Fallback,
        });
    }

    Err(Error::Auth(format!(
        "{token_env} or {FALLBACK_TOKEN_ENV} environment variable is not set."
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_configured_variable_wins() {
        let vars = env(&[("MY_TOKEN", "abc"), ("GITHUB_TOKEN", "gh")]);
        let auth = get_github_auth("MY_TOKEN", |k| vars.get(k).cloned()).unwrap();
        assert_eq!(auth.token, "abc");
        assert_eq!(auth.source, AuthSource::EnvVar("MY_TOKEN".to_string()));
    }

    #[test]
    fn test_falls_back_to_github_token() {
        let vars = env(&[("GITHUB_TOKEN", "gh")]);
        let auth = get_github_auth(DEFAULT_TOKEN_ENV, |k| vars.get(k).cloned()).unwrap();
        assert_eq!(auth.token, "gh");
        assert_eq!(auth.source, AuthSource::Fallback);
    }

    #[test]
    fn test_empty_value_is_unset() {
        let vars = env(&[("MY_TOKEN", ""), ("GITHUB_TOKEN", "gh")]);
        let auth = get_github_auth("MY_TOKEN", |k| vars.get(k).cloned()).unwrap();
        assert_eq!(auth.source, AuthSource::Fallback);
    }

    #[test]
    fn test_missing_token_names_both_variables() {
        let err = get_github_auth("MY_TOKEN", |_| None).unwrap_err();
        match err {
            Error::Auth(msg) => {
                assert!(msg.contains("MY_TOKEN"));
                assert!(msg.contains("GITHUB_TOKEN"));
            }
            other => panic!("Expected Auth error, got: {other:?}"),
        }
    }
}
