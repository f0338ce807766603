//! Reference data error types.

use std::path::PathBuf;

use crate::domain::{InvalidCoordinate, InvalidStopId};

/// A single row that could not be turned into a domain record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// Latitude/longitude out of range or not finite
    #[error(transparent)]
    Coordinate(#[from] InvalidCoordinate),

    /// Stop id empty or malformed
    #[error(transparent)]
    StopId(#[from] InvalidStopId),

    /// A required text column is empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Errors raised while loading the reference tables.
///
/// All of these are fatal: the recommender cannot run on partial data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid CSV or a column failed to deserialize
    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row parsed but holds invalid data
    #[error("invalid record in {} (row {row}): {source}", path.display())]
    InvalidRecord {
        path: PathBuf,
        row: usize,
        #[source]
        source: RecordError,
    },

    /// The file has a header but no rows
    #[error("no records in {}", path.display())]
    EmptyFile { path: PathBuf },

    /// A table assembled in memory has no rows
    #[error("{table} table is empty")]
    EmptyTable { table: &'static str },
}
