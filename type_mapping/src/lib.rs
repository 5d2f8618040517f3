//! Unified type mapping between Rust types and PostgreSQL
//! This crate provides the hstore value type, its text and binary codecs,
//! and the mapping logic used across the storehaus ecosystem

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod hstore;
pub mod object;
pub mod parse;
pub mod pg;
pub mod quote;
pub mod serialize;
pub mod sql;
pub mod types;

#[doc(hidden)]
pub use tracing;

pub use errors::HstoreError;
pub use hstore::Hstore;
pub use parse::parse_text;
pub use quote::{quote_ident, quote_key, quote_value};
pub use serialize::{decode_binary, encode_binary, encode_text};
pub use sql::{dialect, format_param, rust_type_to_pg_type, SchemaType};
pub use types::PostgresValue;
