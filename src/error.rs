//! Error types for label-merge

use thiserror::Error;

/// Errors that can abort an evaluation run
///
/// Policy outcomes such as a missing merge label are not errors; they are
/// reported through [`crate::policy::SkipReason`].
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub API returned an error we could not map to a typed variant
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Error surfaced by octocrab
    #[error("GitHub API error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Generic platform error (used by non-GitHub implementations and mocks)
    #[error("platform error: {0}")]
    Platform(String),

    /// No usable token was found
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Policy configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Repository identifier was not in `owner/repo` form
    #[error("invalid repository '{0}': expected owner/repo")]
    InvalidRepository(String),

    /// The pull request number could not be determined
    #[error("no pull request to evaluate: {0}")]
    MissingPullRequest(String),

    /// The host accepted the merge request but did not merge
    #[error("PR #{pr_number} was not merged: {message}")]
    MergeRejected {
        /// PR that failed to merge
        pr_number: u64,
        /// Message reported by the host
        message: String,
    },
}

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;
