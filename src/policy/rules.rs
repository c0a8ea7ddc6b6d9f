//! Label and review predicates
//!
//! All matching is case-sensitive substring matching. A label without a name
//! or a review without a state never matches.

use crate::config::MergeConfig;
use crate::types::{Label, Review};

fn any_label_contains(labels: &[Label], needle: &str) -> bool {
    labels
        .iter()
        .filter_map(|l| l.name.as_deref())
        .any(|name| name.contains(needle))
}

/// Whether any label carries the merge marker
pub fn has_merge_label(labels: &[Label], config: &MergeConfig) -> bool {
    any_label_contains(labels, &config.merge_label)
}

/// Whether any label selects squash merge
pub fn is_squash_label(labels: &[Label], config: &MergeConfig) -> bool {
    config
        .squash_labels
        .iter()
        .any(|tag| any_label_contains(labels, tag))
}

/// Whether any label selects a standard merge
pub fn is_normal_label(labels: &[Label], config: &MergeConfig) -> bool {
    any_label_contains(labels, &config.standard_label)
}

/// Whether any review approves the PR
pub fn is_approved(reviews: &[Review], config: &MergeConfig) -> bool {
    reviews
        .iter()
        .filter_map(|r| r.state.as_deref())
        .any(|state| state.contains(config.approval_state.as_str()))
}
