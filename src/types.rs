//! Core types for label-merge

/// Identity of the pull request under evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestId {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// PR number
    pub number: u64,
}

impl std::fmt::Display for PullRequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// A label attached to a pull request
///
/// Hosts may omit the name; an absent name never matches any rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    /// Label name
    pub name: Option<String>,
}

impl Label {
    /// Create a label with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// A review submitted on a pull request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    /// Review state, e.g. `APPROVED`, `CHANGES_REQUESTED`, `COMMENTED`
    pub state: Option<String>,
}

impl Review {
    /// Create a review with the given state
    pub fn with_state(state: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
        }
    }
}

/// Detected platform type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// GitHub or GitHub Enterprise
    GitHub,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GitHub => write!(f, "GitHub"),
        }
    }
}

/// Platform configuration
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Platform type
    pub platform: Platform,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

/// Result of a merge operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    /// Whether the merge was successful
    pub merged: bool,
    /// The SHA of the merge commit (if successful)
    pub sha: Option<String>,
    /// Message from the merge operation (especially on failure)
    pub message: Option<String>,
}

/// Merge strategy/method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMethod {
    /// The host's default strategy (a merge commit on GitHub)
    Merge,
    /// Squash all commits into one
    Squash,
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::Squash => write!(f, "squash"),
        }
    }
}
