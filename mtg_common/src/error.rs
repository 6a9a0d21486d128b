//! Error types shared by the MTG tools

use thiserror::Error;

/// Raised when a card identity cannot be built from raw row fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// A required identity field had no value at all
    #[error("missing value for identity field '{0}'")]
    MissingField(&'static str),
}
