//! Error types for the StoreHaus hstore crate
//!
//! This module contains all error types that can be returned by top-level operations.

use config::ConfigError;
use store_object::StorehausError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreHausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StorehausError),
}
