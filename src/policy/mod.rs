//! Merge policy evaluator
//!
//! Three-phase pattern:
//! 1. Gather - fetch labels, then reviews if the decision needs them (effectful)
//! 2. Plan - create a `MergeDecision` (pure, testable)
//! 3. Execute - merge, comment, or do nothing (effectful)

mod execute;
mod plan;
pub mod rules;

pub use execute::{EvaluationOptions, EvaluationOutcome, evaluate_pull_request, execute_decision};
pub use plan::{MergeDecision, SkipReason, create_merge_decision, needs_reviews};
