//! Authentication for GitHub
//!
//! Tokens come from the action input / CLI flag or the environment.

use crate::error::{Error, Result};
use std::env;

/// Environment variables consulted, in order, when no token was passed in
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed explicitly (`--token` or the `token` action input)
    Input,
    /// Token from environment variable
    EnvVar,
}

/// Resolved GitHub credentials
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// Access token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve a GitHub token.
///
/// An explicit, non-blank token wins; otherwise [`TOKEN_ENV_VARS`] are tried
/// in order.
pub fn get_github_auth(explicit: Option<&str>) -> Result<GitHubAuthConfig> {
    resolve_token(explicit, |name| env::var(name).ok())
}

fn resolve_token(
    explicit: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<GitHubAuthConfig> {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(GitHubAuthConfig {
            token: token.to_string(),
            source: AuthSource::Input,
        });
    }

    TOKEN_ENV_VARS
        .iter()
        .find_map(|name| lookup(name).filter(|t| !t.trim().is_empty()))
        .map(|token| GitHubAuthConfig {
            token: token.trim().to_string(),
            source: AuthSource::EnvVar,
        })
        .ok_or_else(|| {
            Error::Auth(format!(
                "no GitHub token provided; pass --token or set {}",
                TOKEN_ENV_VARS.join(" or ")
            ))
        })
}
