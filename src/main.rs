//! Cluster Agent CLI
//!
//! Resolves agent startup configuration and lists cluster members.

use anyhow::Result;
use clap::Parser;
use cluster_agent::cli::agent::run_agent;
use cluster_agent::cli::members::run_members;
use cluster_agent::cli::{Cli, Command};
use cluster_agent::logging::{self, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    logging::init(&LogTarget::parse(&cli.log), cli.verbose)?;

    match &cli.command {
        Command::Agent(args) => run_agent(args)?,
        Command::Members(args) => run_members(args)?,
    }

    Ok(())
}
