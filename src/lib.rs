//! pr-changelog: monthly Markdown changelogs from labeled GitHub pull requests
//!
//! The pipeline has three stages:
//! 1. Fetch - list closed pull requests and keep the merged ones ([`platform`])
//! 2. Group - bucket entries by merge month and label category ([`changelog`])
//! 3. Render - emit Markdown, newest month first ([`changelog`])

pub mod auth;
pub mod changelog;
pub mod config;
pub mod error;
pub mod platform;
pub mod types;
