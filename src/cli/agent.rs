//! Agent subcommand for cluster-agent CLI
//!
//! Builds the effective configuration the agent would start with:
//! built-in defaults, then config files and directories, then flags.

use crate::agent::AgentPlan;
use crate::config::{ConfigLoader, Configuration, merge};
use crate::error::ConfigResult;
use crate::format::{OutputFormat, format_plan_json, format_plan_text};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the agent subcommand
#[derive(Args, Debug, Default)]
pub struct AgentArgs {
    /// JSON file to read configuration from (repeatable)
    #[arg(long = "config-file", value_name = "FILE")]
    pub config_files: Vec<PathBuf>,

    /// Directory of *.json files to read, in lexical order (repeatable)
    #[arg(long = "config-dir", value_name = "DIR")]
    pub config_dirs: Vec<PathBuf>,

    /// Name of this node, must be unique in the cluster
    #[arg(long)]
    pub node: Option<String>,

    /// Role tag advertised for this node
    #[arg(long)]
    pub role: Option<String>,

    /// Address to bind gossip listeners to (default: 0.0.0.0:7946)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Address to bind the RPC listener to (default: 127.0.0.1:7373)
    #[arg(long, value_name = "ADDR")]
    pub rpc_addr: Option<String>,

    /// Log level of the agent
    #[arg(long)]
    pub log_level: Option<String>,

    /// Script to run on events, `script` or `event=script` (repeatable)
    #[arg(long = "event-handler", value_name = "SPEC")]
    pub event_handlers: Vec<String>,

    /// Address of an agent to join at startup (repeatable)
    #[arg(long = "join", value_name = "ADDR")]
    pub start_join: Vec<String>,

    /// Output format for the resolved configuration
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl AgentArgs {
    /// Configuration paths in load order: files, then directories.
    pub fn config_paths(&self) -> Vec<PathBuf> {
        self.config_files
            .iter()
            .chain(self.config_dirs.iter())
            .cloned()
            .collect()
    }

    /// Configuration expressed by command-line flags alone.
    pub fn overlay(&self) -> Configuration {
        Configuration {
            node_name: self.node.clone().unwrap_or_default(),
            role: self.role.clone().unwrap_or_default(),
            bind_addr: self.bind.clone().unwrap_or_default(),
            rpc_addr: self.rpc_addr.clone().unwrap_or_default(),
            log_level: self.log_level.clone().unwrap_or_default(),
            protocol: 0,
            event_handlers: self.event_handlers.clone(),
            start_join: self.start_join.clone(),
        }
    }

    /// Defaults, overlaid with config files, overlaid with flags.
    pub fn effective_config(&self) -> ConfigResult<Configuration> {
        let files = ConfigLoader::new().load(&self.config_paths())?;
        Ok(merge(merge(Configuration::defaults(), files), self.overlay()))
    }
}

/// Resolve the agent configuration and render it in the requested format.
pub fn render_agent(args: &AgentArgs) -> Result<String> {
    let config = args
        .effective_config()
        .context("Error reading configuration")?;
    let plan = AgentPlan::prepare(config).context("Invalid agent configuration")?;

    match args.format {
        OutputFormat::Text => Ok(format_plan_text(&plan)),
        OutputFormat::Json => format_plan_json(&plan).context("Failed to serialize plan"),
    }
}

/// Run the agent subcommand.
pub fn run_agent(args: &AgentArgs) -> Result<()> {
    let output = render_agent(args)?;
    print!("{}", output);
    Ok(())
}
