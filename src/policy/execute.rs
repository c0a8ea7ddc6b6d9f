//! Decision execution - effectful operations
//!
//! Takes a `MergeDecision` produced by the pure planner and carries it out
//! through the platform API: one merge, one comment, or nothing.

use crate::config::{MergeConfig, PolicyMode};
use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::policy::plan::{MergeDecision, SkipReason, create_merge_decision, needs_reviews};
use crate::types::{MergeMethod, MergeResult};
use tracing::{debug, info};

/// Options for a single evaluation
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationOptions {
    /// Decide, but do not merge or comment
    pub dry_run: bool,
}

/// What an evaluation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOutcome {
    /// PR that was evaluated
    pub pr_number: u64,
    /// The decision reached
    pub decision: MergeDecision,
    /// Host response for a performed merge
    pub merge_result: Option<MergeResult>,
    /// Whether the not-approved comment was posted
    pub commented: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl EvaluationOutcome {
    /// Whether the PR was actually merged by this run
    pub fn merged(&self) -> bool {
        self.merge_result.as_ref().is_some_and(|r| r.merged)
    }
}

/// Gather, decide and act on one PR (EFFECTFUL)
///
/// Labels are fetched first; reviews only when the decision depends on them.
/// Host errors propagate and abort the evaluation.
pub async fn evaluate_pull_request(
    platform: &dyn PlatformService,
    config: &MergeConfig,
    pr_number: u64,
    options: EvaluationOptions,
) -> Result<EvaluationOutcome> {
    let labels = platform.get_pr_labels(pr_number).await?;

    let reviews = if needs_reviews(&labels, config) {
        platform.get_pr_reviews(pr_number).await?
    } else {
        Vec::new()
    };

    let decision = create_merge_decision(config, &labels, &reviews);
    debug!(pr_number, mode = %config.mode, %decision, "decided");

    execute_decision(decision, platform, config, pr_number, options).await
}

/// Execute a merge decision (EFFECTFUL)
///
/// A merge is only logged as done after the host confirms it; a response
/// with `merged: false` is returned as [`Error::MergeRejected`].
pub async fn execute_decision(
    decision: MergeDecision,
    platform: &dyn PlatformService,
    config: &MergeConfig,
    pr_number: u64,
    options: EvaluationOptions,
) -> Result<EvaluationOutcome> {
    let mut outcome = EvaluationOutcome {
        pr_number,
        decision,
        merge_result: None,
        commented: false,
        dry_run: options.dry_run,
    };

    match decision {
        MergeDecision::Merge(method) => {
            if options.dry_run {
                info!(pr_number, %method, "dry run: would merge");
                return Ok(outcome);
            }

            let result = platform.merge_pr(pr_number, method).await?;
            if !result.merged {
                return Err(Error::MergeRejected {
                    pr_number,
                    message: result
                        .message
                        .unwrap_or_else(|| "no reason given".to_string()),
                });
            }

            match method {
                MergeMethod::Squash => info!(pr_number, sha = ?result.sha, "squash merge"),
                MergeMethod::Merge => info!(pr_number, sha = ?result.sha, "merge"),
            }
            outcome.merge_result = Some(result);
        }
        MergeDecision::Skip(reason) => {
            info!(pr_number, %reason, "{}", reason.log_message(config.mode));

            if reason == SkipReason::NotApproved && config.mode == PolicyMode::Approval {
                if options.dry_run {
                    info!(pr_number, "dry run: would comment that approval is missing");
                } else {
                    platform
                        .create_pr_comment(pr_number, &config.not_approved_comment)
                        .await?;
                    outcome.commented = true;
                }
            }
        }
    }

    Ok(outcome)
}
