//! Members subcommand for cluster-agent CLI
//!
//! Lists cluster members. The RPC client that talks to a live agent is
//! provided elsewhere; here members come from any [`MemberSource`], by
//! default a saved JSON snapshot.

use crate::config::{DEFAULT_RPC_ADDR, DEFAULT_RPC_PORT, parse_address};
use crate::members::{MemberSource, SnapshotSource, render_members};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Arguments for the members subcommand
#[derive(Args, Debug)]
pub struct MembersArgs {
    /// Additional information such as protocol versions will be shown
    #[arg(long)]
    pub detailed: bool,

    /// RPC address of the agent
    #[arg(long, value_name = "ADDR", default_value = DEFAULT_RPC_ADDR)]
    pub rpc_addr: String,

    /// JSON file holding a member list to display
    #[arg(long, value_name = "FILE")]
    pub from: PathBuf,
}

/// Render members from `source` for the given arguments.
pub fn render(args: &MembersArgs, source: &dyn MemberSource) -> Result<Vec<String>> {
    let rpc = parse_address(&args.rpc_addr, DEFAULT_RPC_PORT)
        .context("Error connecting to agent")?;
    debug!(rpc = %rpc, "Querying members");

    let members = source.members().context("Error retrieving members")?;
    Ok(render_members(&members, args.detailed))
}

/// Run the members subcommand.
pub fn run_members(args: &MembersArgs) -> Result<()> {
    let source = SnapshotSource::new(&args.from);
    for line in render(args, &source)? {
        println!("{}", line);
    }
    Ok(())
}
