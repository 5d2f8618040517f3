//! SQL type conversion utilities
//!
//! This module handles conversion between Rust types
//! and their SQL equivalents.

use crate::hstore::Hstore;
use std::collections::HashMap;

/// Dialect names used as keys of [`SchemaType::schema_type`]
pub mod dialect {
    pub const POSTGRES: &str = "postgres";
    pub const MYSQL: &str = "mysql";
    pub const SQLITE: &str = "sqlite3";
}

/// Physical column type of a custom type, per SQL dialect
pub trait SchemaType {
    fn schema_type() -> HashMap<&'static str, &'static str>;

    /// Column type for one dialect, if the type supports it
    fn schema_type_for(dialect: &str) -> Option<&'static str> {
        Self::schema_type().get(dialect).copied()
    }
}

impl SchemaType for Hstore {
    fn schema_type() -> HashMap<&'static str, &'static str> {
        HashMap::from([(dialect::POSTGRES, "hstore")])
    }
}

/// Placeholder with the cast PostgreSQL needs to read a text parameter as hstore
pub fn format_param(placeholder: &str) -> String {
    format!("{}::hstore", placeholder)
}

/// Map Rust type names to PostgreSQL types for DDL generation
pub fn rust_type_to_pg_type(rust_type: &str) -> &'static str {
    // Normalize type string by removing all whitespace for consistent matching
    let normalized = rust_type.replace(' ', "");
    let inner = normalized
        .strip_prefix("Option<")
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(normalized.as_str());

    match inner {
        "Hstore" | "type_mapping::Hstore" => "HSTORE",
        "HashMap<String,Option<String>>" | "BTreeMap<String,Option<String>>" => "HSTORE",
        "Uuid" | "uuid::Uuid" => "UUID",
        "String" => "VARCHAR",
        "i16" => "SMALLINT",
        "i32" => "INTEGER",
        "i64" => "BIGINT",
        "f32" => "REAL",
        "f64" => "DOUBLE PRECISION",
        "bool" => "BOOLEAN",
        "chrono::DateTime<chrono::Utc>" | "DateTime<Utc>" => "TIMESTAMP WITH TIME ZONE",
        "serde_json::Value" | "Value" => "JSONB",
        "Vec<u8>" => "BYTEA",
        "Vec<String>" => "TEXT[]",
        _ => "VARCHAR", // default fallback
    }
}

/// Check if a Rust type is Optional (nullable in SQL)
pub fn is_optional_type(rust_type: &str) -> bool {
    rust_type.trim().starts_with("Option")
}
