//! Run context from a GitHub Actions environment
//!
//! Resolves which repository and PR to evaluate. Explicit values win; the
//! Actions runner variables fill in the rest.

use crate::error::{Error, Result};
use crate::types::{Platform, PlatformConfig, PullRequestId};
use serde_json::Value;
use std::fs;
use std::path::Path;
use url::Url;

/// Host of the public GitHub REST API
const PUBLIC_API_HOST: &str = "api.github.com";

/// Split `owner/repo` into its parts
pub fn parse_repository(repository: &str) -> Result<(String, String)> {
    let trimmed = repository.trim().trim_end_matches('/');
    match trimmed.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(Error::InvalidRepository(repository.to_string())),
    }
}

/// Extract the PR number from a webhook event payload.
///
/// Looks at `pull_request.number` first (pull_request, pull_request_review,
/// pull_request_target events), then the top-level `number`.
pub fn pr_number_from_event(payload: &Value) -> Option<u64> {
    payload
        .pointer("/pull_request/number")
        .and_then(Value::as_u64)
        .or_else(|| payload.get("number").and_then(Value::as_u64))
}

/// Read the event payload at `path` and extract the PR number
pub fn read_event_pr_number(path: &Path) -> Result<u64> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::MissingPullRequest(format!("failed to read event {}: {e}", path.display()))
    })?;
    let payload: Value = serde_json::from_str(&content).map_err(|e| {
        Error::MissingPullRequest(format!("failed to parse event {}: {e}", path.display()))
    })?;

    pr_number_from_event(&payload).ok_or_else(|| {
        Error::MissingPullRequest(format!(
            "event {} does not reference a pull request",
            path.display()
        ))
    })
}

/// Derive a GitHub Enterprise host from an API base URL.
///
/// Returns `None` for the public API.
pub fn host_from_api_url(api_url: &str) -> Result<Option<String>> {
    let url = Url::parse(api_url)
        .map_err(|e| Error::Config(format!("invalid API URL '{api_url}': {e}")))?;
    let host = url
        .host_str()
        .ok_or_else(|| Error::Config(format!("API URL '{api_url}' has no host")))?;

    if host == PUBLIC_API_HOST {
        Ok(None)
    } else {
        Ok(Some(host.to_string()))
    }
}

/// Inputs for resolving the run context
#[derive(Debug, Clone, Default)]
pub struct ContextInputs<'a> {
    /// `owner/repo`
    pub repository: Option<&'a str>,
    /// Explicit PR number
    pub pr_number: Option<u64>,
    /// Path to the webhook event payload
    pub event_path: Option<&'a Path>,
    /// Explicit GitHub Enterprise host
    pub host: Option<&'a str>,
    /// REST API base URL advertised by the runner
    pub api_url: Option<&'a str>,
}

/// Resolved run context
#[derive(Debug, Clone)]
pub struct RunContext {
    /// PR under evaluation
    pub pull_request: PullRequestId,
    /// Platform configuration for the repository
    pub platform: PlatformConfig,
}

impl RunContext {
    /// Resolve the run context
    pub fn resolve(inputs: &ContextInputs<'_>) -> Result<Self> {
        let repository = inputs.repository.ok_or_else(|| {
            Error::Config("no repository given (set --repo or GITHUB_REPOSITORY)".to_string())
        })?;
        let (owner, repo) = parse_repository(repository)?;

        let number = match (inputs.pr_number, inputs.event_path) {
            (Some(n), _) => n,
            (None, Some(path)) => read_event_pr_number(path)?,
            (None, None) => {
                return Err(Error::MissingPullRequest(
                    "set --pr-number or GITHUB_EVENT_PATH".to_string(),
                ));
            }
        };

        let host = match (inputs.host, inputs.api_url) {
            (Some(h), _) => Some(h.to_string()),
            (None, Some(api_url)) => host_from_api_url(api_url)?,
            (None, None) => None,
        };

        Ok(Self {
            pull_request: PullRequestId {
                owner: owner.clone(),
                repo: repo.clone(),
                number,
            },
            platform: PlatformConfig {
                platform: Platform::GitHub,
                owner,
                repo,
                host,
            },
        })
    }
}
