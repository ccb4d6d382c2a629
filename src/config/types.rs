//! Configuration types and defaults.

use serde::{Deserialize, Serialize};

/// Default port for gossip traffic when `bind_addr` omits one.
pub const DEFAULT_BIND_PORT: u16 = 7946;

/// Default port for the agent's RPC listener.
pub const DEFAULT_RPC_PORT: u16 = 7373;

/// Default RPC address, used by the agent and by `members`.
pub const DEFAULT_RPC_ADDR: &str = "127.0.0.1:7373";

/// Default gossip protocol version.
pub const DEFAULT_PROTOCOL: u8 = 1;

/// Suffix a directory entry must carry to be read as a config source.
pub const CONFIG_EXTENSION: &str = ".json";

/// Agent startup configuration.
///
/// Every field defaults to its zero value, so a partial document decodes
/// into a complete record. Empty strings and zero integers mean "not set"
/// when two configurations are merged; an explicitly empty value cannot be
/// told apart from an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Name of this node in the cluster. Empty means the caller picks one.
    pub node_name: String,

    /// Free-form role tag advertised to other members.
    pub role: String,

    /// Address to bind gossip listeners on, `host` or `host:port`.
    pub bind_addr: String,

    /// Address the RPC listener binds to.
    pub rpc_addr: String,

    /// Log level name, e.g. `INFO` or `DEBUG`.
    pub log_level: String,

    /// Gossip protocol version to speak. Zero means unset.
    pub protocol: u8,

    /// Raw event handler specifications, `script` or `filter=script`.
    pub event_handlers: Vec<String>,

    /// Addresses of existing members to join at startup.
    pub start_join: Vec<String>,
}

impl Configuration {
    /// The built-in defaults an agent starts from before any file is applied.
    pub fn defaults() -> Self {
        Self {
            bind_addr: format!("0.0.0.0:{}", DEFAULT_BIND_PORT),
            rpc_addr: DEFAULT_RPC_ADDR.to_string(),
            log_level: "INFO".to_string(),
            protocol: DEFAULT_PROTOCOL,
            ..Self::default()
        }
    }
}
