//! Merge decision planning - pure functions
//!
//! No I/O happens here. Labels and reviews are fetched by the caller, which
//! keeps the decision table easy to test exhaustively.

use crate::config::{MergeConfig, PolicyMode};
use crate::policy::rules::{has_merge_label, is_approved, is_normal_label, is_squash_label};
use crate::types::{Label, MergeMethod, Review};

/// Why a PR was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No label carries the merge marker
    NoMergeLabel,
    /// Merge label present but no approving review
    NotApproved,
    /// Approved, but neither a squash nor a standard label selects a strategy
    NoStrategyLabel,
}

impl SkipReason {
    /// The line logged when a PR is skipped under `mode`
    pub const fn log_message(self, mode: PolicyMode) -> &'static str {
        match (mode, self) {
            (PolicyMode::LabelOnly, _) => "can not merge",
            (PolicyMode::Approval, Self::NoMergeLabel | Self::NotApproved) => {
                "has no merge label or not yet approved."
            }
            (PolicyMode::Approval, Self::NoStrategyLabel) => "can not merge without general label.",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMergeLabel => write!(f, "no merge label"),
            Self::NotApproved => write!(f, "not approved"),
            Self::NoStrategyLabel => write!(f, "no squash or standard label"),
        }
    }
}

/// Outcome of evaluating the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDecision {
    /// Merge the PR with this method
    Merge(MergeMethod),
    /// Do not merge
    Skip(SkipReason),
}

impl std::fmt::Display for MergeDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge(method) => write!(f, "{method}"),
            Self::Skip(reason) => write!(f, "skip ({reason})"),
        }
    }
}

/// Whether the policy needs reviews to decide, given the labels.
///
/// Approval is only consulted once the merge label is present, and never in
/// label-only mode.
pub fn needs_reviews(labels: &[Label], config: &MergeConfig) -> bool {
    config.mode == PolicyMode::Approval && has_merge_label(labels, config)
}

/// Create a merge decision (PURE - no I/O)
///
/// `reviews` is only read when [`needs_reviews`] is true.
#[must_use]
pub fn create_merge_decision(
    config: &MergeConfig,
    labels: &[Label],
    reviews: &[Review],
) -> MergeDecision {
    if !has_merge_label(labels, config) {
        return MergeDecision::Skip(SkipReason::NoMergeLabel);
    }

    match config.mode {
        PolicyMode::LabelOnly => {
            if is_squash_label(labels, config) {
                MergeDecision::Merge(MergeMethod::Squash)
            } else {
                MergeDecision::Merge(MergeMethod::Merge)
            }
        }
        PolicyMode::Approval => {
            if !is_approved(reviews, config) {
                MergeDecision::Skip(SkipReason::NotApproved)
            } else if is_squash_label(labels, config) {
                MergeDecision::Merge(MergeMethod::Squash)
            } else if is_normal_label(labels, config) {
                MergeDecision::Merge(MergeMethod::Merge)
            } else {
                MergeDecision::Skip(SkipReason::NoStrategyLabel)
            }
        }
    }
}
