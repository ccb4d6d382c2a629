//! Event handler specifications.
//!
//! A handler is written either as `script`, which runs for every event, or
//! as `filter=script`, which runs only for events named by `filter`. The
//! split happens at the first `=`, so the script itself may contain `=`.

use crate::error::{ConfigError, ConfigResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Filter value that matches every event.
pub const WILDCARD_FILTER: &str = "*";

/// Cluster events an agent can dispatch to handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    MemberJoin,
    MemberLeave,
    MemberFailed,
    User,
}

impl EventKind {
    /// Every event kind, in dispatch-listing order.
    pub const ALL: [EventKind; 4] = [
        EventKind::MemberJoin,
        EventKind::MemberLeave,
        EventKind::MemberFailed,
        EventKind::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::MemberJoin => "member-join",
            EventKind::MemberLeave => "member-leave",
            EventKind::MemberFailed => "member-failed",
            EventKind::User => "user",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member-join" => Ok(EventKind::MemberJoin),
            "member-leave" => Ok(EventKind::MemberLeave),
            "member-failed" => Ok(EventKind::MemberFailed),
            "user" => Ok(EventKind::User),
            other => Err(format!("unknown event: {}", other)),
        }
    }
}

/// A parsed handler: which events trigger which script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventScript {
    /// Event name this script reacts to, or `*` for all events.
    pub event_filter: String,
    /// Reserved for filtering user events by name. Always empty for now.
    pub user_event: String,
    /// Command to invoke.
    pub script: String,
}

impl EventScript {
    /// Parse a single handler specification.
    pub fn parse(spec: &str) -> ConfigResult<Self> {
        let (event_filter, script) = match spec.split_once('=') {
            Some((filter, script)) => (filter, script),
            None => (WILDCARD_FILTER, spec),
        };

        if script.is_empty() {
            return Err(ConfigError::EmptyScript {
                handler: spec.to_string(),
            });
        }

        Ok(Self {
            event_filter: event_filter.to_string(),
            user_event: String::new(),
            script: script.to_string(),
        })
    }

    /// Whether this script should run for the named event.
    pub fn matches(&self, event: &str) -> bool {
        self.event_filter == WILDCARD_FILTER || self.event_filter == event
    }
}

impl fmt::Display for EventScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.event_filter, self.script)
    }
}

/// Parse every handler specification, preserving order.
///
/// Produces exactly one script per input; the first invalid entry fails the
/// whole call.
pub fn parse_event_handlers<S: AsRef<str>>(raw: &[S]) -> ConfigResult<Vec<EventScript>> {
    raw.iter().map(|spec| EventScript::parse(spec.as_ref())).collect()
}

/// Scripts that should run for `event`, in declaration order.
pub fn select<'a>(scripts: &'a [EventScript], event: &str) -> Vec<&'a EventScript> {
    scripts.iter().filter(|s| s.matches(event)).collect()
}
