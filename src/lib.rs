//! # StoreHaus Hstore
//!
//! PostgreSQL `hstore` support for the StoreHaus ecosystem: the [`Hstore`]
//! value type with its text and binary codecs, sqlx integration, and
//! hstore predicates for the query builder.
//!
//! ## Quick Start
//!
//! ```rust
//! use storehaus_hstore::prelude::*;
//!
//! let mut attributes = Hstore::new();
//! attributes.set_string("color", "red");
//! attributes.set("size", None);
//! assert_eq!(attributes.to_text(), r#""color"=>"red","size"=>NULL"#);
//!
//! let parsed = parse_text(r#"color=>red, size=>NULL"#);
//! assert_eq!(parsed, attributes);
//!
//! let (sql, values) = QueryBuilder::new()
//!     .filter(hstore::value_eq("attributes", "color", "red"))
//!     .build_select("products")
//!     .unwrap();
//! assert_eq!(sql, r#"SELECT * FROM "products" WHERE "attributes" -> 'color' = $1"#);
//! assert_eq!(values.len(), 1);
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod migration;
pub mod prelude;

pub use errors::StoreHausError;
pub use migration::{create_extension_sql, ensure_hstore_extension};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, HstoreConfig};

// Re-export the hstore type and its codecs
pub use type_mapping::{
    decode_binary, encode_binary, encode_text, format_param, parse_text, quote_key, quote_value,
    Hstore, HstoreError, PostgresValue, SchemaType,
};

// Re-export internal crates used by the public API
pub use store_object;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use sqlx;
