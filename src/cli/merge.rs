//! Merge command - evaluate the policy for one PR and act on it

use crate::cli::Cli;
use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check, cross};
use anstream::println;
use label_merge::error::Result;
use label_merge::policy::{
    EvaluationOptions, EvaluationOutcome, MergeDecision, evaluate_pull_request,
};
use tracing::info;

/// Run the merge command
pub async fn run_merge(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::new(cli)?;

    info!(
        pr = %ctx.pull_request,
        mode = %ctx.config.mode,
        dry_run = cli.dry_run,
        "evaluating merge policy"
    );

    let options = EvaluationOptions {
        dry_run: cli.dry_run,
    };
    let outcome = evaluate_pull_request(
        ctx.platform.as_ref(),
        &ctx.config,
        ctx.pull_request.number,
        options,
    )
    .await?;

    print_outcome(&ctx, &outcome);
    Ok(())
}

/// Print a one-line summary of what happened
fn print_outcome(ctx: &CommandContext, outcome: &EvaluationOutcome) {
    let pr = ctx.pull_request.to_string();

    match outcome.decision {
        MergeDecision::Merge(method) if outcome.dry_run => {
            println!(
                "{} {} {}",
                "Would merge".emphasis(),
                pr.accent(),
                format!("({method})").muted()
            );
        }
        MergeDecision::Merge(method) => {
            let sha = outcome
                .merge_result
                .as_ref()
                .and_then(|r| r.sha.as_deref())
                .unwrap_or("(no sha)");
            println!(
                "{} Merged {} {} {}",
                check(),
                pr.accent(),
                format!("({method})").muted(),
                sha.muted()
            );
        }
        MergeDecision::Skip(reason) => {
            println!("{} Skipped {}: {}", cross(), pr.accent(), reason.warn());
            if outcome.commented {
                println!("   {}", "Posted a comment asking for approval.".muted());
            }
        }
    }
}
