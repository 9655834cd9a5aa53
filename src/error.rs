use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Result type for loading a catalog
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Reasons a catalog can fail to load. Any one of these aborts the whole
/// load; there is no partially-loaded catalog. Line numbers start at 1.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected {expected} comma-separated fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid orbital radius {value:?}: {source}")]
    OrbitalRadius {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: invalid physical radius {value:?}: {source}")]
    PhysicalRadius {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

impl CatalogError {
    /// The line the error was found on, if it came from a particular line
    pub fn line(&self) -> Option<usize> {
        match self {
            CatalogError::Io(_) => None,
            CatalogError::FieldCount { line, .. }
            | CatalogError::OrbitalRadius { line, .. }
            | CatalogError::PhysicalRadius { line, .. } => Some(*line),
        }
    }
}
