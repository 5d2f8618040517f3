//! Integration tests against a live PostgreSQL with the hstore extension
//!
//! Set DATABASE_URL to run them, they are skipped otherwise.

use sqlx::PgPool;
use storehaus_hstore::prelude::*;

async fn setup_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping hstore integration test");
        return None;
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");
    ensure_hstore_extension(&pool, &HstoreConfig::default())
        .await
        .expect("Failed to create hstore extension");
    Some(pool)
}

fn all_kinds_of_values() -> Hstore {
    let mut input = Hstore::from_map([
        ("k1", "v1"),
        ("NOT NULL", "NULL"),
        ("a", "a"),
        ("a'a", "b'b"),
        ("\"a\"", "\"b\""),
        ("tes t", "test test"),
        ("hs", "a=>b"),
        ("hs2", "\"a\"=>b\""),
        ("a\tb", "\nabc\t"),
        ("empty", ""),
    ]);
    input.set("NULL", None);
    input
}

#[tokio::test]
async fn test_null_and_empty() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await else {
        return Ok(());
    };

    let null: Option<Hstore> = sqlx::query_scalar("SELECT NULL::hstore")
        .fetch_one(&pool)
        .await?;
    assert!(null.is_none());

    let empty: Hstore = sqlx::query_scalar("SELECT ''::hstore")
        .fetch_one(&pool)
        .await?;
    assert!(empty.is_empty());

    let bound: Hstore = sqlx::query_scalar("SELECT $1::hstore")
        .bind(Hstore::new())
        .fetch_one(&pool)
        .await?;
    assert!(bound.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_binary_round_trip() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await else {
        return Ok(());
    };

    let input = all_kinds_of_values();
    let output: Hstore = sqlx::query_scalar("SELECT $1::hstore")
        .bind(input.clone())
        .fetch_one(&pool)
        .await?;
    assert_eq!(output, input);

    Ok(())
}

#[tokio::test]
async fn test_text_round_trip() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await else {
        return Ok(());
    };

    // Bind the text form with the cast hint and read PostgreSQL's own text output back
    let input = all_kinds_of_values();
    let sql = format!("SELECT ({})::text", format_param("$1"));
    let text: String = sqlx::query_scalar(&sql)
        .bind(input.to_text())
        .fetch_one(&pool)
        .await?;

    let mut output = Hstore::new();
    output.scan(&PostgresValue::Text(text))?;
    assert_eq!(output, input);

    Ok(())
}

#[tokio::test]
async fn test_predicates() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await else {
        return Ok(());
    };

    let mut tx = pool.begin().await?;
    sqlx::query("CREATE TEMP TABLE hstore_users (name TEXT NOT NULL, attributes hstore)")
        .execute(&mut *tx)
        .await?;

    let mut alice = Hstore::from_map([("role", "admin"), ("team", "core")]);
    alice.set("manager", None);
    let bob = Hstore::from_map([("role", "member"), ("team", "platform")]);

    for (name, attributes) in [("alice", alice), ("bob", bob)] {
        sqlx::query("INSERT INTO hstore_users (name, attributes) VALUES ($1, $2)")
            .bind(name)
            .bind(attributes)
            .execute(&mut *tx)
            .await?;
    }

    let cases = vec![
        (hstore::has_key("attributes", "manager"), vec!["alice"]),
        (hstore::has_all_keys("attributes", ["role", "team"]), vec!["alice", "bob"]),
        (hstore::value_is_null("attributes", "manager"), vec!["alice", "bob"]),
        (hstore::value_eq("attributes", "role", "admin"), vec!["alice"]),
        (hstore::value_neq("attributes", "role", "admin"), vec!["bob"]),
        (hstore::value_gt("attributes", "team", "m"), vec!["bob"]),
        (hstore::value_contains("attributes", "team", "lat"), vec!["bob"]),
        (hstore::value_has_prefix("attributes", "team", "co"), vec!["alice"]),
        (hstore::value_has_suffix("attributes", "role", "ber"), vec!["bob"]),
        (
            QueryFilter::not(hstore::value_eq("attributes", "team", "core")),
            vec!["bob"],
        ),
    ];

    for (filter, expected) in cases {
        let (sql, values) = QueryBuilder::new()
            .filter(filter)
            .order_by("name", SortOrder::Asc)
            .build_select("hstore_users")?;

        let rows = bind_values(sqlx::query(&sql), values)
            .fetch_all(&mut *tx)
            .await?;
        let names: Vec<String> = rows.iter().map(|row| row.get("name")).collect();
        assert_eq!(names, expected, "query {}", sql);
    }

    tx.rollback().await?;
    Ok(())
}
