//! Type mapping definitions
//!
//! Raw values as a PostgreSQL driver surfaces them, before they are
//! converted into typed Rust values.

use crate::hstore::Hstore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PostgresValue {
    Text(String),
    Bytes(Vec<u8>),
    Integer(i32),
    BigInt(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Timestamp(chrono::DateTime<chrono::Utc>),
    Json(serde_json::Value),
    Hstore(Hstore),
    Null,
}

impl PostgresValue {
    /// Short description of the variant, used in conversion errors
    pub fn type_name(&self) -> &'static str {
        match self {
            PostgresValue::Text(_) => "text",
            PostgresValue::Bytes(_) => "bytea",
            PostgresValue::Integer(_) => "integer",
            PostgresValue::BigInt(_) => "bigint",
            PostgresValue::Float(_) => "double precision",
            PostgresValue::Boolean(_) => "boolean",
            PostgresValue::Uuid(_) => "uuid",
            PostgresValue::Timestamp(_) => "timestamp with time zone",
            PostgresValue::Json(_) => "jsonb",
            PostgresValue::Hstore(_) => "hstore",
            PostgresValue::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PostgresValue::Null)
    }
}

impl From<String> for PostgresValue {
    fn from(val: String) -> Self {
        PostgresValue::Text(val)
    }
}

impl From<&str> for PostgresValue {
    fn from(val: &str) -> Self {
        PostgresValue::Text(val.to_string())
    }
}

impl From<Vec<u8>> for PostgresValue {
    fn from(val: Vec<u8>) -> Self {
        PostgresValue::Bytes(val)
    }
}

impl From<&[u8]> for PostgresValue {
    fn from(val: &[u8]) -> Self {
        PostgresValue::Bytes(val.to_vec())
    }
}

impl From<i32> for PostgresValue {
    fn from(val: i32) -> Self {
        PostgresValue::Integer(val)
    }
}

impl From<i64> for PostgresValue {
    fn from(val: i64) -> Self {
        PostgresValue::BigInt(val)
    }
}

impl From<bool> for PostgresValue {
    fn from(val: bool) -> Self {
        PostgresValue::Boolean(val)
    }
}

impl From<Uuid> for PostgresValue {
    fn from(val: Uuid) -> Self {
        PostgresValue::Uuid(val)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for PostgresValue {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        PostgresValue::Timestamp(val)
    }
}

impl From<serde_json::Value> for PostgresValue {
    fn from(val: serde_json::Value) -> Self {
        PostgresValue::Json(val)
    }
}

impl From<Hstore> for PostgresValue {
    fn from(val: Hstore) -> Self {
        PostgresValue::Hstore(val)
    }
}

impl<T> From<Option<T>> for PostgresValue
where
    T: Into<PostgresValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => PostgresValue::Null,
        }
    }
}
