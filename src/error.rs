//! Error types for order analytics.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for loader, aggregator and report operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Errors that can occur while loading, aggregating or reporting.
///
/// Every variant is fatal. The message names the stage that failed.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Input file is missing or unreadable
    #[error("load: cannot open {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header row lacks required columns
    #[error("load: missing required column(s) {missing:?}; found columns {found:?}")]
    Schema {
        missing: Vec<String>,
        found: Vec<String>,
    },

    /// Numeric field missing or not a decimal
    #[error("load: row {row}: field '{field}' is not a valid decimal: '{value}'")]
    Parse {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// Malformed CSV input
    #[error("load: CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No data rows, so mean/max/min are undefined
    #[error("aggregate: dataset contains no orders; statistics are undefined")]
    EmptyDataset,

    /// A sum or difference fell outside the decimal range
    #[error("aggregate: arithmetic overflow computing {quantity} at order '{order_id}'")]
    Overflow {
        quantity: &'static str,
        order_id: String,
    },

    /// Failed to write the report
    #[error("report: I/O error: {0}")]
    Io(#[from] std::io::Error),
}
