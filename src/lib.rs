//! label-merge: label- and approval-gated automatic merging for GitHub PRs
//!
//! A pull request is merged when it carries a merge label and, in the default
//! approval mode, has an approving review. The merge strategy is chosen by
//! label: squash for the configured squash tags, a standard merge for the
//! standard tag.
//!
//! The policy runs through [`policy::evaluate_pull_request`] against any
//! [`platform::PlatformService`]; [`platform::GitHubService`] talks to GitHub.

pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod platform;
pub mod policy;
pub mod types;
