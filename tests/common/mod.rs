//! Shared test helpers

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{CreateCommentCall, MergePrCall, MockPlatformService};

use label_merge::types::{Label, Platform, PlatformConfig, Review};

/// Platform config for a GitHub test repository
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        platform: Platform::GitHub,
        owner: "test".to_string(),
        repo: "repo".to_string(),
        host: None,
    }
}

/// Build labels from names
pub fn labels(names: &[&str]) -> Vec<Label> {
    names.iter().map(|n| Label::named(*n)).collect()
}

/// Build reviews from states
pub fn reviews(states: &[&str]) -> Vec<Review> {
    states.iter().map(|s| Review::with_state(*s)).collect()
}
