//! label-merge CLI

mod cli;

use clap::Parser;
use cli::{Cli, init_tracing, run_merge};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run_merge(&cli).await?;
    Ok(())
}
