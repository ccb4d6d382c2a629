//! CLI command definitions for cluster-agent
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod agent;
pub mod members;

use agent::AgentArgs;
use clap::{Parser, Subcommand};
use members::MembersArgs;

/// Cluster agent configuration and membership tools
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve and validate the agent's startup configuration
    Agent(AgentArgs),

    /// List the members of a cluster
    Members(MembersArgs),
}
