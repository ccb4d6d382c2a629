//! Splitting of `host[:port]` address strings.

use crate::error::{ConfigError, ConfigResult};
use serde::Serialize;
use std::fmt;

/// Host and port halves of an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressParts {
    pub host: String,
    pub port: u16,
}

impl fmt::Display for AddressParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Split `addr` into host and port, using `default_port` when none is given.
///
/// The split is purely syntactic: the host is not resolved or validated.
/// An IPv6 host must be bracketed (`[::1]` or `[::1]:7946`) and loses its
/// brackets; an unbracketed host containing `:` is rejected.
pub fn parse_address(addr: &str, default_port: u16) -> ConfigResult<AddressParts> {
    let invalid = |reason: &str| ConfigError::InvalidPort {
        addr: addr.to_string(),
        reason: reason.to_string(),
    };

    let (host, port) = if let Some(rest) = addr.strip_prefix('[') {
        let (host, after) = rest.split_once(']').ok_or_else(|| invalid("missing ']'"))?;
        if after.is_empty() {
            (host, None)
        } else {
            let port = after
                .strip_prefix(':')
                .ok_or_else(|| invalid("unexpected text after ']'"))?;
            (host, Some(port))
        }
    } else {
        match addr.rsplit_once(':') {
            Some((host, _)) if host.contains(':') => return Err(invalid("too many colons")),
            Some((host, port)) => (host, Some(port)),
            None => (addr, None),
        }
    };

    let port = match port {
        Some(port) => parse_port(port).ok_or_else(|| invalid("not a port number"))?,
        None => default_port,
    };

    Ok(AddressParts {
        host: host.to_string(),
        port,
    })
}

/// Decimal digits only, within `u16` range.
fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse().ok()
}
