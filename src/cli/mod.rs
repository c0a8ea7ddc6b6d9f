//! Command-line interface

mod context;
mod merge;
pub mod style;

pub use merge::run_merge;

use clap::Parser;
use label_merge::config::PolicyMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Merge a pull request when its labels and reviews allow it
#[derive(Parser, Debug)]
#[command(name = "label-merge")]
#[command(about = "Label-gated automatic merging for GitHub pull requests")]
#[command(version)]
pub struct Cli {
    /// GitHub token (falls back to GITHUB_TOKEN, then GH_TOKEN)
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository in format owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: Option<String>,

    /// PR number (read from the event payload when omitted)
    #[arg(long)]
    pub pr_number: Option<u64>,

    /// Webhook event payload to read the PR number from
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Policy file (TOML)
    #[arg(long, env = "INPUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Policy mode, overriding the policy file
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<PolicyMode>,

    /// GitHub Enterprise host
    #[arg(long)]
    pub host: Option<String>,

    /// REST API base URL advertised by the Actions runner
    #[arg(long, env = "GITHUB_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// Decide without merging or commenting
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_mode(s: &str) -> Result<PolicyMode, String> {
    s.parse().map_err(|e: label_merge::error::Error| e.to_string())
}

/// Install the tracing subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "label_merge=debug"
    } else {
        "label_merge=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
