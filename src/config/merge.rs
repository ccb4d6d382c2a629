//! Merging of partial configurations.
//!
//! Scalars in the overlay replace the base only when set; sequences are
//! concatenated, base first. The operation is not commutative.

use super::types::Configuration;

/// Merge two configurations, with `overlay` taking precedence over `base`.
///
/// - Strings and integers: overlay wins if non-empty / non-zero
/// - Lists: base followed by overlay, duplicates kept
///
/// # Example
/// ```
/// use cluster_agent::config::{merge, Configuration};
///
/// let base = Configuration {
///     node_name: "foo".into(),
///     role: "bar".into(),
///     event_handlers: vec!["foo".into()],
///     ..Default::default()
/// };
/// let overlay = Configuration {
///     node_name: "bname".into(),
///     event_handlers: vec!["bar".into()],
///     ..Default::default()
/// };
/// let result = merge(base, overlay);
/// assert_eq!(result.node_name, "bname");
/// assert_eq!(result.role, "bar");
/// assert_eq!(result.event_handlers, vec!["foo", "bar"]);
/// ```
pub fn merge(base: Configuration, overlay: Configuration) -> Configuration {
    let Configuration {
        node_name,
        role,
        bind_addr,
        rpc_addr,
        log_level,
        protocol,
        mut event_handlers,
        mut start_join,
    } = base;

    event_handlers.extend(overlay.event_handlers);
    start_join.extend(overlay.start_join);

    Configuration {
        node_name: pick(node_name, overlay.node_name),
        role: pick(role, overlay.role),
        bind_addr: pick(bind_addr, overlay.bind_addr),
        rpc_addr: pick(rpc_addr, overlay.rpc_addr),
        log_level: pick(log_level, overlay.log_level),
        protocol: if overlay.protocol != 0 {
            overlay.protocol
        } else {
            protocol
        },
        event_handlers,
        start_join,
    }
}

/// Merge multiple configurations in order, with later values taking precedence.
///
/// Equivalent to folding [`merge`] over the list from a zero configuration.
pub fn merge_all(configs: impl IntoIterator<Item = Configuration>) -> Configuration {
    configs.into_iter().fold(Configuration::default(), merge)
}

fn pick(base: String, overlay: String) -> String {
    if overlay.is_empty() { base } else { overlay }
}
