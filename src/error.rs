//! Structured error types for configuration handling.

use serde::Serialize;
use std::path::PathBuf;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Parsing errors
    InvalidPort,
    EmptyScript,

    // Source errors
    DecodeError,
    PathNotFound,
}

/// Errors produced while loading or interpreting agent configuration.
///
/// Every variant carries the input that caused it so callers can report
/// the failure without extra bookkeeping.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An address could not be split into a host and a valid port number.
    #[error("invalid port in address '{addr}': {reason}")]
    InvalidPort { addr: String, reason: String },

    /// An event handler specification resolved to an empty script.
    #[error("event handler '{handler}' has an empty script")]
    EmptyScript { handler: String },

    /// A configuration source was not valid JSON for the agent config shape.
    #[error("{}", decode_message(.path, .line, .column))]
    Decode {
        path: Option<PathBuf>,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A configuration path is missing, unreadable, or not a file or directory.
    #[error("config path not found: {}", .path.display())]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn decode_message(path: &Option<PathBuf>, line: &usize, column: &usize) -> String {
    let location = if *line > 0 {
        format!(" at line {}, column {}", line, column)
    } else {
        String::new()
    };
    match path {
        Some(path) => format!("error decoding '{}'{}", path.display(), location),
        None => format!("error decoding config{}", location),
    }
}

impl ConfigError {
    /// The programmatic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::InvalidPort { .. } => ErrorCode::InvalidPort,
            ConfigError::EmptyScript { .. } => ErrorCode::EmptyScript,
            ConfigError::Decode { .. } => ErrorCode::DecodeError,
            ConfigError::PathNotFound { .. } => ErrorCode::PathNotFound,
        }
    }

    pub(crate) fn decode(err: serde_json::Error) -> Self {
        ConfigError::Decode {
            path: None,
            line: err.line(),
            column: err.column(),
            source: err,
        }
    }

    pub(crate) fn path_not_found(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        ConfigError::PathNotFound {
            path: path.into(),
            source: err,
        }
    }

    /// Attach the source path to a decode error. Other variants pass through.
    pub fn with_path(self, source_path: impl Into<PathBuf>) -> Self {
        match self {
            ConfigError::Decode {
                line,
                column,
                source,
                ..
            } => ConfigError::Decode {
                path: Some(source_path.into()),
                line,
                column,
                source,
            },
            other => other,
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
