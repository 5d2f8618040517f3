//! Convenience re-exports for common store-object usage

// Error types
pub use crate::errors::StorehausError;

// Validation
pub use crate::validation::{ValidatedFieldName, ValidatedTableName, ValidationError};

// Query building
pub use crate::query_builder::{bind_values, QueryBuilder, QueryFilter, SortOrder};
pub use crate::hstore;

// Common external dependencies that are frequently used
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool, Row};
