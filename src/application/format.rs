//! Output format selection

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Encoding of an exported topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xml,
    Json,
}

impl OutputFormat {
    /// Pick the format from a file extension: `.json` is JSON, anything else XML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Xml,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Xml => f.write_str("XML"),
            OutputFormat::Json => f.write_str("JSON"),
        }
    }
}

/// Configured format preference; `Auto` defers to the output file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatPreference {
    #[default]
    Auto,
    Xml,
    Json,
}

impl FormatPreference {
    pub fn resolve(self, output: &Path) -> OutputFormat {
        match self {
            FormatPreference::Auto => OutputFormat::from_path(output),
            FormatPreference::Xml => OutputFormat::Xml,
            FormatPreference::Json => OutputFormat::Json,
        }
    }
}

impl FromStr for FormatPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(FormatPreference::Auto),
            "xml" => Ok(FormatPreference::Xml),
            "json" => Ok(FormatPreference::Json),
            other => Err(format!(
                "unknown format {other:?} (expected auto, xml or json)"
            )),
        }
    }
}
