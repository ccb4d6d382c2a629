//! Cluster member listing.
//!
//! Querying a running agent happens over RPC, which lives outside this
//! crate. [`MemberSource`] is the seam an RPC client plugs into; this module
//! only turns the returned records into text lines.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A cluster member as reported by a running agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub addr: String,
    pub status: String,
    #[serde(default)]
    pub role: String,
    /// Lowest protocol version the member understands.
    #[serde(default)]
    pub delegate_min: u8,
    /// Protocol version the member currently speaks.
    #[serde(default)]
    pub delegate_cur: u8,
    /// Highest protocol version the member understands.
    #[serde(default)]
    pub delegate_max: u8,
}

/// Anything that can report the current member list.
pub trait MemberSource {
    fn members(&self) -> Result<Vec<Member>>;
}

/// Members read from a JSON array on disk, e.g. a saved RPC response.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MemberSource for SnapshotSource {
    fn members(&self) -> Result<Vec<Member>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed reading members from {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid member list in {}", self.path.display()))
    }
}

/// Render members as output lines, one per member plus protocol details
/// when `detailed` is set.
pub fn render_members(members: &[Member], detailed: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(members.len() * if detailed { 3 } else { 1 });
    for member in members {
        lines.push(format!(
            "{}    {}    {}    {}",
            member.name, member.addr, member.status, member.role
        ));
        if detailed {
            lines.push(format!("    Protocol Version: {}", member.delegate_cur));
            lines.push(format!(
                "    Available Protocol Range: [{}, {}]",
                member.delegate_min, member.delegate_max
            ));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn member(name: &str) -> Member {
        Member {
            name: name.to_string(),
            addr: "10.0.0.1:7946".to_string(),
            status: "alive".to_string(),
            role: "web".to_string(),
            delegate_min: 1,
            delegate_cur: 1,
            delegate_max: 2,
        }
    }

    #[test]
    fn test_render_plain() {
        let lines = render_members(&[member("a"), member("b")], false);
        assert_eq!(
            lines,
            vec![
                "a    10.0.0.1:7946    alive    web",
                "b    10.0.0.1:7946    alive    web",
            ]
        );
    }

    #[test]
    fn test_render_detailed() {
        let lines = render_members(&[member("a")], true);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "    Protocol Version: 1");
        assert_eq!(lines[2], "    Available Protocol Range: [1, 2]");
    }

    #[test]
    fn test_snapshot_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("members.json");
        std::fs::write(
            &path,
            r#"[{"name": "n1", "addr": "10.0.0.5:7946", "status": "failed"}]"#,
        )
        .unwrap();

        let members = SnapshotSource::new(&path).members().unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].status, "failed");
        assert!(members[0].role.is_empty());
    }

    #[test]
    fn test_snapshot_source_missing_file() {
        let source = SnapshotSource::new("/no/such/members.json");
        let err = source.members().unwrap_err();
        assert!(err.to_string().contains("/no/such/members.json"));
    }
}
