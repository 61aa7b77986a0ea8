//! JSON export and import
//!
//! `{"roots": [{"name": "...", "children": [...]}]}`

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::application::codec::CodecError;
use crate::domain::Topology;

/// Encode `topology` as pretty-printed JSON with a trailing newline.
pub fn encode(topology: &Topology, indent: usize) -> Result<Vec<u8>, CodecError> {
    let indent = vec![b' '; indent];
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
    topology.serialize(&mut serializer)?;
    out.push(b'\n');
    Ok(out)
}

/// Decode a JSON document and check the topology invariants.
pub fn decode(bytes: &[u8]) -> Result<Topology, CodecError> {
    let topology: Topology = serde_json::from_slice(bytes)?;
    topology.validate()?;
    Ok(topology)
}
