//! Policy configuration
//!
//! The label substrings the policy looks for, and which policy mode to run,
//! are data. Defaults reproduce the stock labelling convention; a TOML file
//! can override any field.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Comment posted when a labelled PR has no approving review.
pub const DEFAULT_NOT_APPROVED_COMMENT: &str = "can not merge because not yet approved.";

/// Which decision policy to evaluate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyMode {
    /// Merge label plus an approving review, strategy chosen by an explicit label
    #[default]
    Approval,
    /// Legacy: merge label alone, squash when tagged, plain merge otherwise
    LabelOnly,
}

impl std::fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approval => write!(f, "approval"),
            Self::LabelOnly => write!(f, "label-only"),
        }
    }
}

impl std::str::FromStr for PolicyMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "approval" => Ok(Self::Approval),
            "label-only" => Ok(Self::LabelOnly),
            other => Err(Error::Config(format!(
                "unknown policy mode '{other}' (expected 'approval' or 'label-only')"
            ))),
        }
    }
}

/// Full policy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    /// Policy mode
    pub mode: PolicyMode,
    /// Substring a label must contain to make the PR eligible
    pub merge_label: String,
    /// Substrings that select squash merge
    pub squash_labels: Vec<String>,
    /// Substring that selects a standard merge (approval mode only)
    pub standard_label: String,
    /// Substring a review state must contain to count as approval
    pub approval_state: String,
    /// Comment posted when approval is missing
    pub not_approved_comment: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            mode: PolicyMode::default(),
            merge_label: "merge".to_string(),
            squash_labels: ["nobunaga", "hideyoshi", "ieyasu", "tsunayoshi"]
                .into_iter()
                .map(String::from)
                .collect(),
            standard_label: "other".to_string(),
            approval_state: "APPROVED".to_string(),
            not_approved_comment: DEFAULT_NOT_APPROVED_COMMENT.to_string(),
        }
    }
}

impl MergeConfig {
    /// Parse a config from TOML text and validate it
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject blank match strings.
    ///
    /// Every label name contains the empty string, so a blank rule would
    /// match every PR.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("merge_label", &self.merge_label),
            ("standard_label", &self.standard_label),
            ("approval_state", &self.approval_state),
            ("not_approved_comment", &self.not_approved_comment),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(Error::Config(format!("{field} must not be blank")));
        }

        if let Some(index) = self.squash_labels.iter().position(|l| l.trim().is_empty()) {
            return Err(Error::Config(format!("squash_labels[{index}] must not be blank")));
        }
        Ok(())
    }
}

/// Load policy configuration from disk.
///
/// The path was asked for explicitly, so a missing file is an error rather
/// than a silent fallback to defaults.
pub fn load_config(path: &Path) -> Result<MergeConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    MergeConfig::from_toml(&content).map_err(|e| match e {
        Error::Config(msg) => Error::Config(format!("{}: {msg}", path.display())),
        other => other,
    })
}
