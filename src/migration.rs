//! Hstore extension bootstrap
//!
//! `hstore` ships as a PostgreSQL extension and must be installed in the
//! database before any hstore column or parameter can be used.

use crate::debug_log;
use crate::errors::StoreHausError;
use config::HstoreConfig;
use sqlx::PgPool;
use type_mapping::quote_ident;

/// `CREATE EXTENSION` statement for the configured schema. The schema is
/// always written as a quoted identifier.
pub fn create_extension_sql(config: &HstoreConfig) -> String {
    format!(
        "CREATE EXTENSION IF NOT EXISTS hstore WITH SCHEMA {}",
        quote_ident(&config.extension_schema)
    )
}

/// Install the hstore extension unless the configuration disables it
pub async fn ensure_hstore_extension(
    pool: &PgPool,
    config: &HstoreConfig,
) -> Result<(), StoreHausError> {
    if !config.create_extension {
        debug_log!("hstore extension creation disabled by configuration");
        return Ok(());
    }

    let sql = create_extension_sql(config);
    debug_log!("Creating hstore extension with SQL: {}", sql);
    sqlx::query(&sql).execute(pool).await?;
    Ok(())
}
