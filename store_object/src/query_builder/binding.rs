//! Binding rendered parameters onto sqlx queries

use serde_json::Value;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;

/// The PostgreSQL parameter type a rendered value is bound as
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    Text(String),
    BigInt(i64),
    Double(f64),
    Boolean(bool),
    Null,
}

impl From<Value> for BoundValue {
    /// Strings stay text so they compare against `hstore -> key`, which is
    /// always text. Arrays and objects are bound as their JSON text.
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => BoundValue::Text(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    BoundValue::BigInt(i)
                } else if let Some(f) = n.as_f64() {
                    BoundValue::Double(f)
                } else {
                    BoundValue::Text(n.to_string())
                }
            }
            Value::Bool(b) => BoundValue::Boolean(b),
            Value::Null => BoundValue::Null,
            other => BoundValue::Text(other.to_string()),
        }
    }
}

/// Bind one rendered value
pub fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: Value,
) -> Query<'q, Postgres, PgArguments> {
    match BoundValue::from(value) {
        BoundValue::Text(s) => query.bind(s),
        BoundValue::BigInt(i) => query.bind(i),
        BoundValue::Double(f) => query.bind(f),
        BoundValue::Boolean(b) => query.bind(b),
        BoundValue::Null => query.bind(Option::<String>::None),
    }
}

/// Bind every value in placeholder order
pub fn bind_values<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    values: Vec<Value>,
) -> Query<'q, Postgres, PgArguments> {
    for value in values {
        query = bind_value(query, value);
    }
    query
}
