//! Mock platform service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use label_merge::error::{Error, Result};
use label_merge::platform::PlatformService;
use label_merge::types::{Label, MergeMethod, MergeResult, PlatformConfig, Review};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `create_pr_comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommentCall {
    pub pr_number: u64,
    pub body: String,
}

/// Call record for `merge_pr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePrCall {
    pub pr_number: u64,
    pub method: MergeMethod,
}

/// Simple mock platform service for testing
///
/// Features:
/// - Configurable labels and reviews per PR
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    labels_responses: Mutex<HashMap<u64, Vec<Label>>>,
    reviews_responses: Mutex<HashMap<u64, Vec<Review>>>,
    merge_responses: Mutex<HashMap<u64, MergeResult>>,
    // Call tracking
    get_labels_calls: Mutex<Vec<u64>>,
    get_reviews_calls: Mutex<Vec<u64>>,
    merge_pr_calls: Mutex<Vec<MergePrCall>>,
    create_comment_calls: Mutex<Vec<CreateCommentCall>>,
    // Error injection
    error_on_get_labels: Mutex<Option<String>>,
    error_on_get_reviews: Mutex<Option<String>>,
    error_on_merge_pr: Mutex<Option<String>>,
    error_on_create_comment: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            labels_responses: Mutex::new(HashMap::new()),
            reviews_responses: Mutex::new(HashMap::new()),
            merge_responses: Mutex::new(HashMap::new()),
            get_labels_calls: Mutex::new(Vec::new()),
            get_reviews_calls: Mutex::new(Vec::new()),
            merge_pr_calls: Mutex::new(Vec::new()),
            create_comment_calls: Mutex::new(Vec::new()),
            error_on_get_labels: Mutex::new(None),
            error_on_get_reviews: Mutex::new(None),
            error_on_merge_pr: Mutex::new(None),
            error_on_create_comment: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `get_pr_labels` return an error
    pub fn fail_get_labels(&self, msg: &str) {
        *self.error_on_get_labels.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get_pr_reviews` return an error
    pub fn fail_get_reviews(&self, msg: &str) {
        *self.error_on_get_reviews.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pr` return an error
    pub fn fail_merge_pr(&self, msg: &str) {
        *self.error_on_merge_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_pr_comment` return an error
    pub fn fail_create_comment(&self, msg: &str) {
        *self.error_on_create_comment.lock().unwrap() = Some(msg.to_string());
    }

    // === Response setup ===

    /// Set the labels returned for a PR
    pub fn set_labels(&self, pr_number: u64, names: &[&str]) {
        self.set_raw_labels(pr_number, names.iter().map(|n| Label::named(*n)).collect());
    }

    /// Set labels verbatim (e.g. to include unnamed labels)
    pub fn set_raw_labels(&self, pr_number: u64, labels: Vec<Label>) {
        self.labels_responses
            .lock()
            .unwrap()
            .insert(pr_number, labels);
    }

    /// Set the review states returned for a PR
    pub fn set_reviews(&self, pr_number: u64, states: &[&str]) {
        self.reviews_responses.lock().unwrap().insert(
            pr_number,
            states.iter().map(|s| Review::with_state(*s)).collect(),
        );
    }

    /// Set the response for `merge_pr` for a specific PR
    pub fn set_merge_response(&self, pr_number: u64, result: MergeResult) {
        self.merge_responses
            .lock()
            .unwrap()
            .insert(pr_number, result);
    }

    /// Helper to set up a PR with labels, reviews, and a successful merge
    pub fn setup_pr(&self, pr_number: u64, labels: &[&str], reviews: &[&str]) {
        self.set_labels(pr_number, labels);
        self.set_reviews(pr_number, reviews);
        self.set_merge_response(
            pr_number,
            MergeResult {
                merged: true,
                sha: Some(format!("merged_sha_{pr_number}")),
                message: None,
            },
        );
    }

    // === Call verification methods ===

    /// Get all PRs `get_pr_labels` was called for
    pub fn get_labels_calls(&self) -> Vec<u64> {
        self.get_labels_calls.lock().unwrap().clone()
    }

    /// Get all PRs `get_pr_reviews` was called for
    pub fn get_reviews_calls(&self) -> Vec<u64> {
        self.get_reviews_calls.lock().unwrap().clone()
    }

    /// Get all `merge_pr` calls
    pub fn get_merge_pr_calls(&self) -> Vec<MergePrCall> {
        self.merge_pr_calls.lock().unwrap().clone()
    }

    /// Get all `create_pr_comment` calls
    pub fn get_create_comment_calls(&self) -> Vec<CreateCommentCall> {
        self.create_comment_calls.lock().unwrap().clone()
    }

    /// Assert that `merge_pr` was called with a specific method
    pub fn assert_merge_called_with_method(&self, pr_number: u64, method: MergeMethod) {
        let calls = self.get_merge_pr_calls();
        assert!(
            calls
                .iter()
                .any(|c| c.pr_number == pr_number && c.method == method),
            "Expected merge_pr({pr_number}, {method:?}) but got: {calls:?}"
        );
    }

    /// Assert that `merge_pr` was NOT called for a specific PR
    pub fn assert_merge_not_called(&self, pr_number: u64) {
        let calls = self.get_merge_pr_calls();
        assert!(
            !calls.iter().any(|c| c.pr_number == pr_number),
            "Expected merge_pr({pr_number}) NOT to be called but it was: {calls:?}"
        );
    }

    /// Get count of `merge_pr` calls
    pub fn merge_call_count(&self) -> usize {
        self.merge_pr_calls.lock().unwrap().len()
    }

    /// Get count of `create_pr_comment` calls
    pub fn comment_call_count(&self) -> usize {
        self.create_comment_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn get_pr_labels(&self, pr_number: u64) -> Result<Vec<Label>> {
        self.get_labels_calls.lock().unwrap().push(pr_number);

        if let Some(msg) = self.error_on_get_labels.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let responses = self.labels_responses.lock().unwrap();
        responses.get(&pr_number).cloned().ok_or_else(|| {
            Error::Platform(format!(
                "get_pr_labels: no response configured for PR #{pr_number}"
            ))
        })
    }

    async fn get_pr_reviews(&self, pr_number: u64) -> Result<Vec<Review>> {
        self.get_reviews_calls.lock().unwrap().push(pr_number);

        if let Some(msg) = self.error_on_get_reviews.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let responses = self.reviews_responses.lock().unwrap();
        Ok(responses.get(&pr_number).cloned().unwrap_or_default())
    }

    async fn merge_pr(&self, pr_number: u64, method: MergeMethod) -> Result<MergeResult> {
        self.merge_pr_calls
            .lock()
            .unwrap()
            .push(MergePrCall { pr_number, method });

        if let Some(msg) = self.error_on_merge_pr.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let responses = self.merge_responses.lock().unwrap();
        responses.get(&pr_number).cloned().ok_or_else(|| {
            Error::Platform(format!(
                "merge_pr: no response configured for PR #{pr_number}"
            ))
        })
    }

    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        self.create_comment_calls
            .lock()
            .unwrap()
            .push(CreateCommentCall {
                pr_number,
                body: body.to_string(),
            });

        if let Some(msg) = self.error_on_create_comment.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }
        Ok(())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
