//! CLI argument definitions using clap

use std::path::{Path, PathBuf};

use clap::{Parser, ValueHint};

use crate::cli::error::{CliError, CliResult};

/// Build a configuration-item topology from a `root;parent;child` list and export it
#[derive(Parser, Debug)]
#[command(name = "topology")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the file containing topology data
    #[arg(long = "topology-file", value_hint = ValueHint::FilePath)]
    pub topology_file: Option<PathBuf>,

    /// Path to the exported document (.json for JSON, XML otherwise)
    #[arg(
        long = "xml-file",
        visible_alias = "output-file",
        value_hint = ValueHint::FilePath
    )]
    pub output_file: Option<PathBuf>,
}

impl Cli {
    /// Both paths, or a usage error naming the first one missing.
    pub fn paths(&self) -> CliResult<(&Path, &Path)> {
        let input = self.topology_file.as_deref().ok_or_else(|| {
            CliError::Usage("please provide the path to the topology file (--topology-file)".into())
        })?;
        let output = self.output_file.as_deref().ok_or_else(|| {
            CliError::Usage("please provide the path to the output file (--xml-file)".into())
        })?;
        Ok((input, output))
    }
}
