//! Topology encodings
//!
//! XML is export-only; JSON round-trips through [`json::decode`].

pub mod json;
pub mod xml;

use thiserror::Error;

use crate::application::format::OutputFormat;
use crate::domain::{DomainError, Topology};

/// Errors raised while encoding or decoding a topology document.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("name {name:?} contains characters not allowed in XML")]
    InvalidXmlName { name: String },

    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(#[from] DomainError),
}

/// Render a topology in the given format, indenting nested levels by `indent` spaces.
pub fn render(
    topology: &Topology,
    format: OutputFormat,
    indent: usize,
) -> Result<Vec<u8>, CodecError> {
    match format {
        OutputFormat::Xml => xml::encode(topology, indent),
        OutputFormat::Json => json::encode(topology, indent),
    }
}
