use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorehausError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}
