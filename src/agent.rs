//! Agent startup preparation.
//!
//! Turns an effective [`Configuration`] into the values an agent needs
//! before it can start: a node name, parsed listen addresses, and parsed
//! event handlers. Any error here is fatal to startup.

use crate::config::{
    AddressParts, Configuration, DEFAULT_BIND_PORT, DEFAULT_RPC_PORT, EventScript,
    parse_address, parse_event_handlers,
};
use crate::error::ConfigResult;
use serde::Serialize;
use tracing::{debug, info};

/// Everything an agent resolved from its configuration.
#[derive(Debug, Clone, Serialize)]
pub struct AgentPlan {
    pub config: Configuration,
    pub bind: AddressParts,
    pub rpc: AddressParts,
    pub event_scripts: Vec<EventScript>,
}

impl AgentPlan {
    /// Validate and interpret `config`.
    ///
    /// An empty node name is replaced by a generated one.
    pub fn prepare(mut config: Configuration) -> ConfigResult<Self> {
        if config.node_name.is_empty() {
            config.node_name = generate_node_name();
            info!(node_name = %config.node_name, "No node name configured, generated one");
        }

        let bind = parse_address(&config.bind_addr, DEFAULT_BIND_PORT)?;
        let rpc = parse_address(&config.rpc_addr, DEFAULT_RPC_PORT)?;
        let event_scripts = parse_event_handlers(&config.event_handlers)?;

        debug!(
            bind = %bind,
            rpc = %rpc,
            handlers = event_scripts.len(),
            "Agent configuration validated"
        );

        Ok(Self {
            config,
            bind,
            rpc,
            event_scripts,
        })
    }
}

/// Generate a human-readable node name.
fn generate_node_name() -> String {
    use petname::{Generator, Petnames};

    Petnames::medium()
        .generate_one(2, "-")
        .unwrap_or_else(|| format!("agent-{}", std::process::id()))
}
