//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{Label, MergeMethod, MergeResult, Platform, PlatformConfig, Review};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `host` selects a GitHub Enterprise instance, whose REST API lives at
    /// `https://{host}/api/v3`.
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(ref h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self {
            client,
            config: PlatformConfig {
                platform: Platform::GitHub,
                owner,
                repo,
                host,
            },
        })
    }
}

/// Render octocrab's review state the way the REST API spells it
/// (`APPROVED`, `CHANGES_REQUESTED`, ...).
fn review_state_name(state: &octocrab::models::pulls::ReviewState) -> Option<String> {
    serde_json::to_value(state)
        .ok()
        .and_then(|v| v.as_str().map(ToString::to_string))
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn get_pr_labels(&self, pr_number: u64) -> Result<Vec<Label>> {
        debug!(pr_number, "getting PR labels");
        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .get(pr_number)
            .await?;

        let labels: Vec<Label> = pr
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|l| Label { name: Some(l.name) })
            .collect();
        debug!(pr_number, count = labels.len(), "got PR labels");
        Ok(labels)
    }

    async fn get_pr_reviews(&self, pr_number: u64) -> Result<Vec<Review>> {
        debug!(pr_number, "listing PR reviews");
        let first_page = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .list_reviews(pr_number)
            .send()
            .await?;

        let reviews: Vec<Review> = self
            .client
            .all_pages(first_page)
            .await?
            .iter()
            .map(|r| Review {
                state: r.state.as_ref().and_then(review_state_name),
            })
            .collect();
        debug!(pr_number, count = reviews.len(), "listed PR reviews");
        Ok(reviews)
    }

    async fn merge_pr(&self, pr_number: u64, method: MergeMethod) -> Result<MergeResult> {
        debug!(pr_number, %method, "merging PR");

        let pulls = self.client.pulls(&self.config.owner, &self.config.repo);
        let result = match method {
            MergeMethod::Squash => {
                pulls
                    .merge(pr_number)
                    .method(octocrab::params::pulls::MergeMethod::Squash)
                    .send()
                    .await
            }
            // No explicit method: the repository's default applies
            MergeMethod::Merge => pulls.merge(pr_number).send().await,
        }
        .map_err(|e| Error::GitHubApi(format!("Merge failed: {e}")))?;

        let merge_result = MergeResult {
            merged: result.merged,
            sha: result.sha,
            message: result.message,
        };

        debug!(
            pr_number,
            merged = merge_result.merged,
            sha = ?merge_result.sha,
            "merge complete"
        );
        Ok(merge_result)
    }

    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        debug!(pr_number, "creating PR comment");
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .create_comment(pr_number, body)
            .await?;
        debug!(pr_number, "created PR comment");
        Ok(())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
