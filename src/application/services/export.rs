//! Topology export service
//!
//! Reads a relationship list, builds the topology and writes it out as XML or JSON.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::codec::{self, json};
use crate::application::format::OutputFormat;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::Topology;
use crate::infrastructure::traits::FileSystem;

/// Summary of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub format: OutputFormat,
    pub roots: usize,
    pub items: usize,
    pub bytes: usize,
}

/// Service for loading topologies and exporting them.
pub struct ExportService {
    fs: Arc<dyn FileSystem>,
    indent: usize,
}

impl ExportService {
    /// Create a new export service indenting output by `indent` spaces per level.
    pub fn new(fs: Arc<dyn FileSystem>, indent: usize) -> Self {
        Self { fs, indent }
    }

    /// Read and build the topology described by a relationship file.
    pub fn load(&self, input: &Path) -> ApplicationResult<Topology> {
        debug!("load: input={}", input.display());
        let content = self
            .fs
            .read_to_string(input)
            .with_path_context("read topology file", input)?;

        let topology =
            Topology::parse(&content).map_err(|source| ApplicationError::InvalidInput {
                path: input.to_path_buf(),
                source,
            })?;
        debug!("load: topology\n{}", topology);
        Ok(topology)
    }

    /// Render a topology to bytes without touching the filesystem.
    pub fn render(&self, topology: &Topology, format: OutputFormat) -> ApplicationResult<Vec<u8>> {
        codec::render(topology, format, self.indent).map_err(|e| ApplicationError::Encoding {
            format,
            message: e.to_string(),
        })
    }

    /// Load `input`, render it and atomically replace `output`.
    ///
    /// Nothing is written unless every earlier step succeeded.
    pub fn export(
        &self,
        input: &Path,
        output: &Path,
        format: OutputFormat,
    ) -> ApplicationResult<ExportReport> {
        let topology = self.load(input)?;
        let document = self.render(&topology, format)?;

        let replacing = self.fs.exists(output);
        self.fs
            .write_atomic(output, &document)
            .map_err(|source| ApplicationError::WriteOutput {
                path: output.to_path_buf(),
                source,
            })?;
        info!(
            "exported {} roots as {} to {} ({})",
            topology.roots.len(),
            format,
            output.display(),
            if replacing { "replaced" } else { "created" }
        );

        Ok(ExportReport {
            format,
            roots: topology.roots.len(),
            items: topology.item_count(),
            bytes: document.len(),
        })
    }

    /// Read a topology back from a JSON export.
    pub fn import_json(&self, path: &Path) -> ApplicationResult<Topology> {
        debug!("import_json: path={}", path.display());
        let bytes = self.fs.read(path).with_path_context("read JSON file", path)?;
        json::decode(&bytes).map_err(|e| ApplicationError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
