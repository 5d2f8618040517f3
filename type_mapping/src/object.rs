//! Structured-object adapter
//!
//! Converts between `Hstore` and a generic JSON object whose values are
//! strings or null, as used by GraphQL scalar marshaling.

use crate::errors::HstoreError;
use crate::hstore::Hstore;
use serde_json::{Map, Value};
use std::io::Write;

impl Hstore {
    /// Build an hstore from a JSON object of string-or-null values
    pub fn from_object(value: &Value) -> Result<Hstore, HstoreError> {
        let object = value.as_object().ok_or(HstoreError::TypeMustBeObject)?;

        let mut hstore = Hstore::new();
        for (key, val) in object {
            match val {
                Value::String(s) => hstore.set_string(key.clone(), s.clone()),
                Value::Null => hstore.set(key.clone(), None),
                _ => return Err(HstoreError::TypeMustBeObject),
            }
        }

        Ok(hstore)
    }

    /// Replace the contents of this hstore with the given JSON object.
    /// On error the hstore is left unchanged.
    pub fn unmarshal_object(&mut self, value: &Value) -> Result<(), HstoreError> {
        *self = Hstore::from_object(value)?;
        Ok(())
    }

    /// JSON object with `null` for NULL values
    pub fn to_object(&self) -> Value {
        let object: Map<String, Value> = self
            .iter()
            .map(|(k, v)| {
                let v = v.map_or(Value::Null, |s| Value::String(s.to_string()));
                (k.to_string(), v)
            })
            .collect();
        Value::Object(object)
    }

    /// Write the JSON object followed by a newline
    pub fn marshal<W: Write>(&self, mut writer: W) -> Result<(), HstoreError> {
        serde_json::to_writer(&mut writer, self)?;
        writer
            .write_all(b"\n")
            .map_err(|e| HstoreError::Serialization(serde_json::Error::io(e)))?;
        Ok(())
    }
}
