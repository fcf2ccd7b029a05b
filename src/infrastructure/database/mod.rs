//! SQLite-backed persistence: pool lifecycle and the repository factory.
//!
//! The pool is process-wide, created once by `init_database_with_retry` and
//! shared by every repository handle. Schema creation and the default-account
//! seed run as part of initialization and are idempotent.

mod sqlite_repository;


use crate::config::{AppConfig, DatabaseConfig};
use crate::domain::RepositoryPtr;
use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlite_repository::SqliteRepository;

/// Process-wide pool handle, set exactly once at startup.
static POOL: OnceCell<SqlitePool> = OnceCell::new();

/// Delay between failed connection attempts.
const RETRY_DELAY: Duration = Duration::from_millis(200);

/// Initializes the shared database pool, creating the schema and seeding the
/// default account. Safe to call more than once; later calls are no-ops.
///
/// Fails only after `retry_count` connection attempts have been exhausted;
/// an unreachable storage medium is fatal at startup.
pub async fn init_database_with_retry(config: &DatabaseConfig) -> Result<()> {
    // ---
    if POOL.get().is_some() {
        return Ok(());
    }

    let mut attempt = 0;
    let pool = loop {
        attempt += 1;
        match connect(config).await {
            Ok(pool) => break pool,
            Err(err) if attempt < config.retry_count => {
                tracing::warn!(
                    "Database connection attempt {attempt}/{} failed: {err}",
                    config.retry_count
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(err) => return Err(err.into()),
        }
    };

    init_schema(&pool).await?;
    seed_default_user(&pool).await?;

    tracing::info!("Database initialized at {}", config.database_url);

    // A racing initializer may have won; its pool is equivalent.
    let _ = POOL.set(pool);

    Ok(())
}

/// Convenience wrapper reading [`DatabaseConfig`] from the environment.
pub async fn init_database_with_retry_from_env() -> Result<()> {
    // ---
    let config = AppConfig::from_env()?;
    init_database_with_retry(&config.database).await
}

/// Creates a repository handle backed by the shared pool.
///
/// # Errors
/// Fails when called before `init_database_with_retry`.
pub fn create_sqlite_repository() -> Result<RepositoryPtr> {
    // ---
    let pool = POOL
        .get()
        .cloned()
        .ok_or_else(|| anyhow!("database pool not initialized"))?;

    Ok(Arc::new(SqliteRepository::new(pool)))
}

async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    // ---
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
}

/// Idempotently ensures the `users` and `games` tables exist.
async fn init_schema(pool: &SqlitePool) -> Result<()> {
    // ---
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE NOT NULL,
            password TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS games (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            platform TEXT NOT NULL,
            genre TEXT NOT NULL,
            status TEXT NOT NULL,
            user_id INTEGER NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users(id)
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Inserts the fixed demo account (id=1, demo/demo) on first run only.
async fn seed_default_user(pool: &SqlitePool) -> Result<()> {
    // ---
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = 1")
        .fetch_optional(pool)
        .await?;

    if existing.is_none() {
        sqlx::query("INSERT INTO users (id, username, password) VALUES (1, 'demo', 'demo')")
            .execute(pool)
            .await?;
        tracing::info!("Seeded default demo account");
    }

    Ok(())
}
