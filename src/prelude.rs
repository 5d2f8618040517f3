//! Convenience re-exports for common StoreHaus hstore usage
//!
//! # Example
//!
//! ```rust
//! use storehaus_hstore::prelude::*;
//!
//! let hs = Hstore::from_map([("a", "b")]);
//! assert!(hs.has("a"));
//! ```

pub use crate::errors::StoreHausError;
pub use crate::migration::{create_extension_sql, ensure_hstore_extension};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, HstoreConfig};

// Hstore value type and codecs
pub use type_mapping::{
    encode_text, format_param, parse_text, Hstore, HstoreError, PostgresValue, SchemaType,
};

// Query building with hstore predicates
pub use store_object::prelude::*;

// Common external dependencies
pub use sqlx;
pub use tokio;
pub use sqlx::{Decode, Encode, Postgres, Type};
