//! Hstore predicates
//!
//! Conditions on an hstore column using the `exist`, `defined`, `?&` and `->`
//! operators. Comparison values are always bound as parameters. Keys are
//! written into the SQL as quoted literals, so they must come from trusted
//! code rather than user input.
//!
//! ```
//! use store_object::hstore;
//!
//! let (sql, values) = hstore::value_eq("attributes", "key", "val").to_sql();
//! assert_eq!(sql, r#""attributes" -> 'key' = $1"#);
//! assert_eq!(values, vec![serde_json::json!("val")]);
//! ```

use crate::query_builder::filter::QueryFilter;
use serde_json::Value;
use type_mapping::{debug_log, quote_ident, quote_key};

/// Where the bound value must sit inside the matched text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeMatch {
    Contains,
    Prefix,
    Suffix,
}

impl LikeMatch {
    /// LIKE pattern for `value`. Metacharacters in `value` are not escaped.
    pub fn pattern(&self, value: &str) -> String {
        match self {
            LikeMatch::Contains => format!("%{}%", value),
            LikeMatch::Prefix => format!("{}%", value),
            LikeMatch::Suffix => format!("%{}", value),
        }
    }
}

/// Comparison applied to `column -> key`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    pub fn to_sql(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HstorePredicate {
    HasKey {
        column: String,
        key: String,
    },
    HasAllKeys {
        column: String,
        keys: Vec<String>,
    },
    /// True when the key is missing or its value is NULL
    ValueIsNull {
        column: String,
        key: String,
    },
    ValueCompare {
        column: String,
        key: String,
        operator: CompareOp,
        value: String,
    },
    ValueLike {
        column: String,
        key: String,
        mode: LikeMatch,
        value: String,
    },
}

fn value_of(column: &str, key: &str) -> String {
    format!("{} -> {}", quote_ident(column), quote_key(key))
}

fn bind(values: &mut Vec<Value>, param_counter: &mut i32, value: String) -> String {
    values.push(Value::String(value));
    let param = format!("${}", param_counter);
    *param_counter += 1;
    param
}

impl HstorePredicate {
    /// Render the SQL fragment, pushing bound values and advancing the
    /// parameter counter
    pub fn render(&self, values: &mut Vec<Value>, param_counter: &mut i32) -> String {
        let sql = match self {
            HstorePredicate::HasKey { column, key } => {
                format!("exist({}, {})", quote_ident(column), quote_key(key))
            }
            HstorePredicate::HasAllKeys { column, keys } => {
                if keys.is_empty() {
                    format!("{} ?& ARRAY[]::text[]", quote_ident(column))
                } else {
                    let quoted: Vec<String> = keys.iter().map(|k| quote_key(k)).collect();
                    format!("{} ?& ARRAY[{}]", quote_ident(column), quoted.join(","))
                }
            }
            HstorePredicate::ValueIsNull { column, key } => {
                format!("defined({}, {}) is false", quote_ident(column), quote_key(key))
            }
            HstorePredicate::ValueCompare {
                column,
                key,
                operator,
                value,
            } => {
                let param = bind(values, param_counter, value.clone());
                format!("{} {} {}", value_of(column, key), operator.to_sql(), param)
            }
            HstorePredicate::ValueLike {
                column,
                key,
                mode,
                value,
            } => {
                let param = bind(values, param_counter, mode.pattern(value));
                format!("{} LIKE {}", value_of(column, key), param)
            }
        };

        debug_log!("hstore predicate rendered: {}", sql);
        sql
    }
}

fn compare(column: &str, key: &str, operator: CompareOp, value: &str) -> QueryFilter {
    QueryFilter::Hstore(HstorePredicate::ValueCompare {
        column: column.to_string(),
        key: key.to_string(),
        operator,
        value: value.to_string(),
    })
}

fn like(column: &str, key: &str, mode: LikeMatch, value: &str) -> QueryFilter {
    QueryFilter::Hstore(HstorePredicate::ValueLike {
        column: column.to_string(),
        key: key.to_string(),
        mode,
        value: value.to_string(),
    })
}

/// `exist(column, 'key')`
pub fn has_key(column: &str, key: &str) -> QueryFilter {
    QueryFilter::Hstore(HstorePredicate::HasKey {
        column: column.to_string(),
        key: key.to_string(),
    })
}

/// `column ?& ARRAY['k1','k2']`
pub fn has_all_keys<I, K>(column: &str, keys: I) -> QueryFilter
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    QueryFilter::Hstore(HstorePredicate::HasAllKeys {
        column: column.to_string(),
        keys: keys.into_iter().map(Into::into).collect(),
    })
}

/// `defined(column, 'key') is false`
pub fn value_is_null(column: &str, key: &str) -> QueryFilter {
    QueryFilter::Hstore(HstorePredicate::ValueIsNull {
        column: column.to_string(),
        key: key.to_string(),
    })
}

pub fn value_eq(column: &str, key: &str, value: &str) -> QueryFilter {
    compare(column, key, CompareOp::Eq, value)
}

pub fn value_neq(column: &str, key: &str, value: &str) -> QueryFilter {
    compare(column, key, CompareOp::Ne, value)
}

/// Comparisons are lexicographic on the text value
pub fn value_gt(column: &str, key: &str, value: &str) -> QueryFilter {
    compare(column, key, CompareOp::Gt, value)
}

pub fn value_gte(column: &str, key: &str, value: &str) -> QueryFilter {
    compare(column, key, CompareOp::Gte, value)
}

pub fn value_lt(column: &str, key: &str, value: &str) -> QueryFilter {
    compare(column, key, CompareOp::Lt, value)
}

pub fn value_lte(column: &str, key: &str, value: &str) -> QueryFilter {
    compare(column, key, CompareOp::Lte, value)
}

pub fn value_contains(column: &str, key: &str, value: &str) -> QueryFilter {
    like(column, key, LikeMatch::Contains, value)
}

pub fn value_has_prefix(column: &str, key: &str, value: &str) -> QueryFilter {
    like(column, key, LikeMatch::Prefix, value)
}

pub fn value_has_suffix(column: &str, key: &str, value: &str) -> QueryFilter {
    like(column, key, LikeMatch::Suffix, value)
}
