//! Common test utilities for integration tests.
//!
//! Tests run against the PostgreSQL database named by `TEST_DATABASE_URL`
//! and are skipped when it is not set. Every test uses its own keys, so
//! tests can share one database without cleaning up between runs.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use fake::Fake;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Connects to the test database and applies the migrations.
///
/// Returns `None` when `TEST_DATABASE_URL` is not set.
pub async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL is not set, skipping database test");
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    persistence::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// A Telegram id no other test uses.
pub fn unique_tg_id() -> i64 {
    (1_000_000_000_i64..i64::MAX).fake()
}

/// Suffix for natural keys (question text) no other test uses.
pub fn unique_suffix() -> String {
    format!(
        "{}-{}",
        Utc::now().timestamp_nanos_opt().unwrap_or_default(),
        (0..u32::MAX).fake::<u32>()
    )
}

/// Current time according to the database server.
pub async fn db_now(pool: &PgPool) -> DateTime<Utc> {
    sqlx::query_scalar("SELECT NOW()")
        .fetch_one(pool)
        .await
        .expect("Failed to read database time")
}
