//! Error types for hstore conversions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HstoreError {
    /// The driver handed over something that is neither text nor bytes
    #[error("invalid input type: {0}")]
    InvalidInputType(String),

    #[error("type Hstore must be a object")]
    TypeMustBeObject,

    #[error("invalid binary hstore: {0}")]
    InvalidBinary(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
