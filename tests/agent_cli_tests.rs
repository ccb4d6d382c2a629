//! Integration tests for the agent and members subcommands.

use clap::Parser;
use cluster_agent::cli::agent::render_agent;
use cluster_agent::cli::members::render;
use cluster_agent::cli::{Cli, Command};
use cluster_agent::format::OutputFormat;
use cluster_agent::members::SnapshotSource;
use std::fs;
use tempfile::TempDir;

/// Helper to parse a command line, panicking on clap errors.
fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("Failed to parse command line")
}

#[test]
fn agent_flags_parse_into_overlay() {
    let cli = parse(&[
        "cluster-agent",
        "agent",
        "--node",
        "n1",
        "--bind",
        "10.0.0.1:8000",
        "--event-handler",
        "a.sh",
        "--event-handler",
        "member-leave=b.sh",
        "--join",
        "10.0.0.2",
        "--format",
        "json",
    ]);

    let Command::Agent(args) = cli.command else {
        panic!("expected agent subcommand");
    };
    assert_eq!(args.format, OutputFormat::Json);

    let overlay = args.overlay();
    assert_eq!(overlay.node_name, "n1");
    assert_eq!(overlay.bind_addr, "10.0.0.1:8000");
    assert_eq!(overlay.event_handlers, vec!["a.sh", "member-leave=b.sh"]);
    assert_eq!(overlay.start_join, vec!["10.0.0.2"]);
    assert!(overlay.role.is_empty());
}

#[test]
fn agent_layers_defaults_dirs_and_flags() {
    let temp = TempDir::new().expect("tmp");
    let conf_d = temp.path().join("conf.d");
    fs::create_dir(&conf_d).expect("mkdir");
    fs::write(
        conf_d.join("00-base.json"),
        r#"{"node_name": "file-node", "role": "cache", "event_handlers": ["all.sh"]}"#,
    )
    .expect("write");
    fs::write(conf_d.join("10-bind.json"), r#"{"bind_addr": "192.168.1.10"}"#).expect("write");

    let dir_arg = conf_d.to_string_lossy().to_string();
    let cli = parse(&[
        "cluster-agent",
        "agent",
        "--config-dir",
        &dir_arg,
        "--role",
        "edge",
        "--event-handler",
        "user=deploy.sh",
    ]);
    let Command::Agent(args) = cli.command else {
        panic!("expected agent subcommand");
    };

    let text = render_agent(&args).expect("render");
    assert!(text.contains("Node name: file-node\n"));
    assert!(text.contains("Role: edge\n"));
    assert!(text.contains("Bind addr: 192.168.1.10:7946\n"));
    assert!(text.contains("RPC addr: 127.0.0.1:7373\n"));
    assert!(text.contains("  *=all.sh\n"));
    assert!(text.contains("  user=deploy.sh\n"));
    assert!(text.contains("  user: all.sh, deploy.sh\n"));
    assert!(text.contains("  member-join: all.sh\n"));
}

#[test]
fn agent_rejects_invalid_bind_port() {
    let cli = parse(&["cluster-agent", "agent", "--node", "n1", "--bind", "0.0.0.0:port"]);
    let Command::Agent(args) = cli.command else {
        panic!("expected agent subcommand");
    };

    let err = render_agent(&args).expect_err("bad port should fail");
    let msg = format!("{:#}", err);
    assert!(msg.contains("invalid port"), "got: {}", msg);
}

#[test]
fn members_renders_snapshot() {
    let temp = TempDir::new().expect("tmp");
    let snapshot = temp.path().join("members.json");
    fs::write(
        &snapshot,
        r#"[
            {"name": "a", "addr": "10.0.0.1:7946", "status": "alive", "role": "web",
             "delegate_min": 1, "delegate_cur": 2, "delegate_max": 3},
            {"name": "b", "addr": "10.0.0.2:7946", "status": "left", "role": "db"}
        ]"#,
    )
    .expect("write");

    let from = snapshot.to_string_lossy().to_string();
    let cli = parse(&["cluster-agent", "members", "--detailed", "--from", &from]);
    let Command::Members(args) = cli.command else {
        panic!("expected members subcommand");
    };
    assert_eq!(args.rpc_addr, "127.0.0.1:7373");

    let lines = render(&args, &SnapshotSource::new(&args.from)).expect("render");
    assert_eq!(
        lines,
        vec![
            "a    10.0.0.1:7946    alive    web",
            "    Protocol Version: 2",
            "    Available Protocol Range: [1, 3]",
            "b    10.0.0.2:7946    left    db",
            "    Protocol Version: 0",
            "    Available Protocol Range: [0, 0]",
        ]
    );
}
