//! JSON encoding of the persisted record.

use mokup_model::Configuration;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{PersistenceError, Result};

const INDENT: &[u8] = b"    ";

/// Encode a configuration as 4-space indented JSON with a trailing newline.
pub fn encode_configuration(config: &Configuration) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    config
        .serialize(&mut serializer)
        .map_err(|source| PersistenceError::Serialization { source })?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Decode a persisted record. `location` names the record in error messages.
///
/// Bytes that are not valid UTF-8 are reported like any other malformed record.
pub fn decode_configuration(bytes: &[u8], location: &str) -> Result<Configuration> {
    serde_json::from_slice(bytes).map_err(|source| PersistenceError::Deserialization {
        location: location.to_string(),
        source,
    })
}
