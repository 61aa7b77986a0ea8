//! Domain layer: entities and tree construction
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod entities;
pub mod error;
pub mod parser;

pub use builder::TopologyBuilder;
pub use entities::*;
pub use error::{DomainError, DomainResult, Field};
pub use parser::{parse_line, triplets, Triplets, DELIMITER};
