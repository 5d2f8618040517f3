//! Serialization utilities
//!
//! Text output for parameter binding and the binary layout PostgreSQL uses
//! for `hstore_send`/`hstore_recv`.

use crate::errors::HstoreError;
use crate::hstore::Hstore;
use crate::quote::quote_value;
use crate::types::PostgresValue;

impl Hstore {
    /// Serialize to the hstore text format, `"key"=>"value","key2"=>NULL`
    pub fn to_text(&self) -> String {
        self.iter()
            .map(|(key, value)| match value {
                Some(v) => format!("{}=>{}", quote_value(key), quote_value(v)),
                None => format!("{}=>NULL", quote_value(key)),
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Driver value for an optional hstore: `Null` when there is none
    pub fn value(hstore: Option<&Hstore>) -> PostgresValue {
        match encode_text(hstore) {
            Some(text) => PostgresValue::Text(text),
            None => PostgresValue::Null,
        }
    }
}

/// Text form of an optional hstore, `None` standing for SQL NULL
pub fn encode_text(hstore: Option<&Hstore>) -> Option<String> {
    hstore.map(Hstore::to_text)
}

fn write_len(buf: &mut Vec<u8>, len: usize) -> Result<(), HstoreError> {
    let len = i32::try_from(len)
        .map_err(|_| HstoreError::InvalidBinary(format!("length {} does not fit in i32", len)))?;
    buf.extend_from_slice(&len.to_be_bytes());
    Ok(())
}

/// Encode in the binary wire layout: pair count, then length-prefixed
/// keys and values, a value length of -1 marking NULL
pub fn encode_binary(hstore: &Hstore) -> Result<Vec<u8>, HstoreError> {
    let mut buf = Vec::with_capacity(4 + hstore.len() * 16);
    write_len(&mut buf, hstore.len())?;

    for (key, value) in hstore {
        write_len(&mut buf, key.len())?;
        buf.extend_from_slice(key.as_bytes());

        match value {
            Some(v) => {
                write_len(&mut buf, v.len())?;
                buf.extend_from_slice(v.as_bytes());
            }
            None => buf.extend_from_slice(&(-1i32).to_be_bytes()),
        }
    }

    Ok(buf)
}

struct BinaryReader<'a> {
    buf: &'a [u8],
}

impl<'a> BinaryReader<'a> {
    fn read_i32(&mut self) -> Result<i32, HstoreError> {
        let (head, rest) = self
            .buf
            .split_first_chunk::<4>()
            .ok_or_else(|| HstoreError::InvalidBinary("unexpected end of input".to_string()))?;
        self.buf = rest;
        Ok(i32::from_be_bytes(*head))
    }

    fn read_str(&mut self, len: usize) -> Result<String, HstoreError> {
        if self.buf.len() < len {
            return Err(HstoreError::InvalidBinary(format!(
                "expected {} bytes, {} left",
                len,
                self.buf.len()
            )));
        }
        let (head, rest) = self.buf.split_at(len);
        self.buf = rest;
        String::from_utf8(head.to_vec())
            .map_err(|e| HstoreError::InvalidBinary(format!("invalid utf-8: {}", e)))
    }

    fn read_len(&mut self, what: &str) -> Result<usize, HstoreError> {
        let len = self.read_i32()?;
        usize::try_from(len)
            .map_err(|_| HstoreError::InvalidBinary(format!("negative {} length {}", what, len)))
    }
}

/// Decode the binary wire layout produced by [`encode_binary`]
pub fn decode_binary(buf: &[u8]) -> Result<Hstore, HstoreError> {
    let mut reader = BinaryReader { buf };
    let count = reader.read_len("pair count")?;
    let mut hstore = Hstore::new();

    for _ in 0..count {
        let key_len = reader.read_len("key")?;
        let key = reader.read_str(key_len)?;

        let value = match reader.read_i32()? {
            -1 => None,
            len if len < 0 => {
                return Err(HstoreError::InvalidBinary(format!(
                    "negative value length {}",
                    len
                )))
            }
            len => Some(reader.read_str(len as usize)?),
        };

        hstore.set(key, value);
    }

    trace_log!("decoded binary hstore with {} pairs", hstore.len());

    if !reader.buf.is_empty() {
        return Err(HstoreError::InvalidBinary(format!(
            "{} trailing bytes",
            reader.buf.len()
        )));
    }

    Ok(hstore)
}
