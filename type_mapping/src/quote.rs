//! Quoting helpers
//!
//! Two different quoting schemes meet here: SQL string literals for keys
//! written into predicate fragments, and hstore text-format quoting for
//! keys and values inside a serialized hstore.

/// Quote a key as a SQL string literal: `a'b` becomes `'a''b'`
pub fn quote_key(key: &str) -> String {
    format!("'{}'", key.replace('\'', "''"))
}

/// Quote a key or value for the hstore text format: `"a"` becomes `"\"a\""`
pub fn quote_value(value: &str) -> String {
    // Backslashes first, otherwise the quote escapes get doubled too
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Quote a SQL identifier: `attributes` becomes `"attributes"`
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
