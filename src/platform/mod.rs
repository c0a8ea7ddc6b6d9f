//! Platform services for the repository host
//!
//! The merge policy only ever talks to the host through [`PlatformService`],
//! so tests can swap in a mock and other hosts can be added later.

mod factory;
mod github;

pub use factory::create_platform_service;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{Label, MergeMethod, MergeResult, PlatformConfig, Review};
use async_trait::async_trait;

/// Platform service trait for the PR operations the merge policy needs
///
/// Implementations are bound to one repository through [`PlatformConfig`];
/// every operation takes the PR number within that repository.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// List the labels currently attached to a PR
    async fn get_pr_labels(&self, pr_number: u64) -> Result<Vec<Label>>;

    /// List every review submitted on a PR
    async fn get_pr_reviews(&self, pr_number: u64) -> Result<Vec<Review>>;

    /// Merge a PR with the specified method
    ///
    /// [`MergeMethod::Merge`] leaves the strategy to the host's default.
    async fn merge_pr(&self, pr_number: u64, method: MergeMethod) -> Result<MergeResult>;

    /// Create a comment on a PR
    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<()>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
