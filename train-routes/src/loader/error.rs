//! Route file loading errors.

use std::path::PathBuf;

use crate::network::GraphError;

/// Errors that can occur when loading a route table from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Path does not name a CSV file
    #[error("File should have CSV format.")]
    NotCsv,

    /// Path does not exist
    #[error("The file in this directory does not exist.")]
    Missing,

    /// File could not be opened
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV reader failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Rows could not be turned into a route graph
    #[error("invalid route table: {0}")]
    Graph(#[from] GraphError),
}
