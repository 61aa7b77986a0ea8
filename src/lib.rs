//! Build a configuration-item topology from a `root;parent;child` relationship
//! list and export it as XML or JSON.
//!
//! ```text
//! SUP_PR1;Cronjobs;Archive          Topology
//! SAS_PR1;Cronjobs;Archive    →     ├── SUP_PR1 ── Cronjobs ── Archive
//! SAS_PR1;Process;node.js           └── SAS_PR1 ┬─ Cronjobs ── Archive
//!                                               └─ Process ─── node.js
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::codec::{json, xml};
pub use application::services::{ExportReport, ExportService};
pub use application::{ApplicationError, ApplicationResult, OutputFormat};
pub use domain::{ConfigItem, DomainError, Topology, TopologyBuilder, Triplet};
