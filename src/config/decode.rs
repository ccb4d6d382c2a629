//! JSON decoding of a single configuration source.

use super::types::Configuration;
use crate::error::{ConfigError, ConfigResult};
use std::io::Read;

/// Decode one JSON document into a [`Configuration`].
///
/// Missing keys keep their zero values and unknown keys are ignored. A
/// malformed document yields [`ConfigError::Decode`] and no configuration.
pub fn decode<R: Read>(reader: R) -> ConfigResult<Configuration> {
    serde_json::from_reader(reader).map_err(ConfigError::decode)
}

/// Decode a configuration held in memory.
pub fn decode_str(input: &str) -> ConfigResult<Configuration> {
    serde_json::from_str(input).map_err(ConfigError::decode)
}
