//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

/// Position of a field within a `root;parent;child` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Root,
    Parent,
    Child,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Root => "root",
            Field::Parent => "parent",
            Field::Child => "child",
        };
        f.write_str(name)
    }
}

/// Domain errors represent malformed relationship data or a broken tree.
/// Line numbers are 1-based; `total` is the number of lines in the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("bad line format at line {line}/{total}: expected 3 ';'-separated fields, found {found}: {content:?}")]
    FieldCount {
        line: usize,
        total: usize,
        found: usize,
        content: String,
    },

    #[error("empty {field} field at line {line}/{total}: {content:?}")]
    EmptyField {
        line: usize,
        total: usize,
        field: Field,
        content: String,
    },

    #[error("configuration item with empty name under {parent:?}")]
    EmptyName { parent: String },

    #[error("duplicate configuration item {name:?} under {parent:?}")]
    DuplicateSibling { parent: String, name: String },
}

impl DomainError {
    /// 1-based input line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            DomainError::FieldCount { line, .. } | DomainError::EmptyField { line, .. } => {
                Some(*line)
            }
            DomainError::EmptyName { .. } | DomainError::DuplicateSibling { .. } => None,
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
