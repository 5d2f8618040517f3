//! sqlx integration for `Hstore`
//!
//! Parameters are sent in the binary layout. Results are decoded from
//! either format, text going through the lenient text parser.

use crate::hstore::Hstore;
use crate::parse::parse_text;
use crate::serialize::{decode_binary, encode_binary};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueFormat, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

impl Type<Postgres> for Hstore {
    fn type_info() -> PgTypeInfo {
        // hstore is an extension type, its OID is looked up by name
        PgTypeInfo::with_name("hstore")
    }
}

impl PgHasArrayType for Hstore {
    fn array_type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("_hstore")
    }
}

impl Encode<'_, Postgres> for Hstore {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        buf.extend_from_slice(&encode_binary(self)?);
        Ok(IsNull::No)
    }
}

impl<'r> Decode<'r, Postgres> for Hstore {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        match value.format() {
            PgValueFormat::Binary => Ok(decode_binary(value.as_bytes()?)?),
            PgValueFormat::Text => Ok(parse_text(value.as_str()?)),
        }
    }
}
