//! Error types for tcg_pricing

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which input a structural problem was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Inventory,
    Prices,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Inventory => write!(f, "inventory"),
            TableKind::Prices => write!(f, "price"),
        }
    }
}

/// Unified error type for tcg_pricing operations
#[derive(Debug, Error)]
pub enum PricingError {
    /// A column the run cannot do without is absent from a table
    #[error("{table} file is missing required column '{column}'")]
    MissingColumn { table: TableKind, column: String },
    /// Scalar settings that cannot produce a sensible price
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// A record has more cells than the header row
    #[error("Line {line}: expected at most {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
    /// Refusing to replace a file the user did not ask to overwrite
    #[error("Output file already exists: {} (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),
    /// Failed to read or write CSV data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for tcg_pricing operations
pub type Result<T> = std::result::Result<T, PricingError>;
