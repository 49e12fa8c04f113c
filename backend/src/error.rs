//! Error types for the fallible edges of the model
//!
//! The calculation engine itself is total: every formula guards its
//! divisions and every numeric leaf is coerced at deserialization time,
//! so `calculate_*` functions never return errors. Errors only arise at
//! the boundaries (import/export, stores, structural edits).

use thiserror::Error;

/// Errors raised outside the calculation core
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Category '{0}' is computed and cannot hold line items")]
    ProtectedCategory(String),

    #[error("Unknown overhead category: {0}")]
    UnknownCategory(String),

    #[error("Index {index} out of range for {collection} (len {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for ModelError {
    fn from(err: csv::Error) -> Self {
        ModelError::Serialization(err.to_string())
    }
}
