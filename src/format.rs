//! Output formatting utilities for text and JSON.

use crate::agent::AgentPlan;
use crate::config::{EventKind, select};
use clap::ValueEnum;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format a prepared agent plan as human-readable text.
pub fn format_plan_text(plan: &AgentPlan) -> String {
    let config = &plan.config;
    let mut out = String::new();

    out.push_str(&format!("Node name: {}\n", config.node_name));
    if !config.role.is_empty() {
        out.push_str(&format!("Role: {}\n", config.role));
    }
    out.push_str(&format!("Bind addr: {}\n", plan.bind));
    out.push_str(&format!("RPC addr: {}\n", plan.rpc));
    if !config.log_level.is_empty() {
        out.push_str(&format!("Log level: {}\n", config.log_level));
    }
    if config.protocol != 0 {
        out.push_str(&format!("Protocol: {}\n", config.protocol));
    }

    if !config.start_join.is_empty() {
        out.push_str(&format!("Start join: {}\n", config.start_join.join(", ")));
    }

    if !plan.event_scripts.is_empty() {
        out.push_str("Event handlers:\n");
        for script in &plan.event_scripts {
            out.push_str(&format!("  {}\n", script));
        }

        out.push_str("Event routing:\n");
        for kind in EventKind::ALL {
            let scripts: Vec<&str> = select(&plan.event_scripts, kind.as_str())
                .iter()
                .map(|s| s.script.as_str())
                .collect();
            if !scripts.is_empty() {
                out.push_str(&format!("  {}: {}\n", kind, scripts.join(", ")));
            }
        }
    }

    out
}

/// Format a prepared agent plan as pretty JSON.
pub fn format_plan_json(plan: &AgentPlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;

    fn plan() -> AgentPlan {
        AgentPlan::prepare(Configuration {
            node_name: "n1".into(),
            role: "web".into(),
            event_handlers: vec!["a.sh".into(), "member-join=b.sh".into()],
            start_join: vec!["10.0.0.2".into()],
            ..Configuration::defaults()
        })
        .unwrap()
    }

    #[test]
    fn test_text_lists_handlers() {
        let text = format_plan_text(&plan());
        assert!(text.contains("Node name: n1\n"));
        assert!(text.contains("Bind addr: 0.0.0.0:7946\n"));
        assert!(text.contains("  *=a.sh\n"));
        assert!(text.contains("  member-join=b.sh\n"));
        assert!(text.contains("Start join: 10.0.0.2\n"));
    }

    #[test]
    fn test_text_routes_scripts_per_event() {
        let text = format_plan_text(&plan());
        assert!(text.contains("Event routing:\n"));
        assert!(text.contains("  member-join: a.sh, b.sh\n"));
        assert!(text.contains("  member-leave: a.sh\n"));
        assert!(text.contains("  member-failed: a.sh\n"));
        assert!(text.contains("  user: a.sh\n"));
    }

    #[test]
    fn test_text_omits_routing_without_handlers() {
        let plan = AgentPlan::prepare(Configuration {
            node_name: "n1".into(),
            ..Configuration::defaults()
        })
        .unwrap();
        assert!(!format_plan_text(&plan).contains("Event routing"));
    }

    #[test]
    fn test_json_includes_parsed_values() {
        let json = format_plan_json(&plan()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["config"]["node_name"], "n1");
        assert_eq!(value["bind"]["port"], 7946);
        assert_eq!(value["event_scripts"][1]["event_filter"], "member-join");
    }
}
