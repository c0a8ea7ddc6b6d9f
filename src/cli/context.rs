//! Shared command context
//!
//! Everything the merge command needs before it can evaluate: the resolved
//! PR, the policy configuration and a platform service.

use crate::cli::Cli;
use label_merge::auth::get_github_auth;
use label_merge::config::{MergeConfig, load_config};
use label_merge::context::{ContextInputs, RunContext};
use label_merge::error::Result;
use label_merge::platform::{PlatformService, create_platform_service};
use label_merge::types::PullRequestId;
use tracing::debug;

/// Context for one evaluation run
pub struct CommandContext {
    /// PR under evaluation
    pub pull_request: PullRequestId,
    /// Policy configuration (file values with CLI overrides applied)
    pub config: MergeConfig,
    /// Platform service (GitHub)
    pub platform: Box<dyn PlatformService>,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// - Resolve repository and PR number
    /// - Load the policy file, apply `--mode`
    /// - Resolve the token and create the platform service
    pub fn new(cli: &Cli) -> Result<Self> {
        let run = RunContext::resolve(&ContextInputs {
            repository: cli.repo.as_deref(),
            pr_number: cli.pr_number,
            event_path: cli.event_path.as_deref(),
            host: cli.host.as_deref(),
            api_url: cli.api_url.as_deref(),
        })?;

        let mut config = match cli.config.as_deref() {
            Some(path) => load_config(path)?,
            None => MergeConfig::default(),
        };
        if let Some(mode) = cli.mode {
            config.mode = mode;
        }
        debug!(?config, "loaded policy");

        let auth = get_github_auth(cli.token.as_deref())?;
        let platform = create_platform_service(&run.platform, &auth)?;

        Ok(Self {
            pull_request: run.pull_request,
            config,
            platform,
        })
    }
}
