//! Error types for the weigh-in core engine

use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the weigh-in core engine
///
/// Domain evaluation itself never fails: malformed contracted-weight text
/// and unset scale readings map to defined verdict states. Errors only
/// arise at the host boundary (malformed fight-card input) and when
/// serializing an evaluation for persistence.
#[derive(Error, Debug)]
pub enum WeighInCoreError {
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Fight not found: {0}")]
    FightNotFound(String),

    #[error("Invalid fight record: {0}")]
    InvalidFight(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<WeighInCoreError> for PyErr {
    fn from(err: WeighInCoreError) -> PyErr {
        match err {
            WeighInCoreError::DeserializationError(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
            WeighInCoreError::FightNotFound(id) => {
                PyKeyError::new_err(format!("Fight not found: {}", id))
            }
            WeighInCoreError::InvalidFight(msg) => {
                PyValueError::new_err(format!("Invalid fight record: {}", msg))
            }
            WeighInCoreError::SerializationError(msg) => {
                PyRuntimeError::new_err(format!("Serialization error: {}", msg))
            }
        }
    }
}

impl From<serde_json::Error> for WeighInCoreError {
    fn from(err: serde_json::Error) -> Self {
        WeighInCoreError::SerializationError(err.to_string())
    }
}

/// Result type alias for the weigh-in core engine
pub type Result<T> = std::result::Result<T, WeighInCoreError>;
