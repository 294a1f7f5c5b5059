//! SQLite persistence for the social program panel.
//!
//! Repositories are zero-sized structs whose async methods take `&DbPool`
//! first. The pool holds a single connection: the application is
//! single-threaded and every statement is awaited in place.

use std::str::FromStr;

use painel_core::hashing::hash_password;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Seeded administrator, created on first run when absent.
pub const ADMIN_EMAIL: &str = "admin@programa.gov.br";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const ADMIN_NAME: &str = "Administrador";

/// Open (creating if needed) the database file behind `database_url`.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

/// A private in-memory database. The single connection is never recycled,
/// otherwise the data would vanish with it.
pub async fn create_memory_pool() -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Verify the connection answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Insert the default administrator unless that email already exists.
///
/// Returns `true` when a row was inserted.
pub async fn seed_admin(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT OR IGNORE INTO usuarios (email, senha, nome, created_at)
         VALUES (?, ?, ?, ?)",
    )
    .bind(ADMIN_EMAIL)
    .bind(hash_password(ADMIN_PASSWORD))
    .bind(ADMIN_NAME)
    .bind(chrono::Utc::now())
    .execute(pool)
    .await?;

    let inserted = result.rows_affected() > 0;
    if inserted {
        tracing::info!(email = ADMIN_EMAIL, "Seeded default administrator");
    }
    Ok(inserted)
}

/// Open, migrate and seed in one step, as both the binary and tests do.
pub async fn bootstrap(database_url: &str) -> Result<DbPool, BootstrapError> {
    let pool = create_pool(database_url).await?;
    prepare(&pool).await?;
    Ok(pool)
}

/// Migrate and seed an already-open pool.
pub async fn prepare(pool: &DbPool) -> Result<(), BootstrapError> {
    health_check(pool).await?;
    run_migrations(pool).await?;
    seed_admin(pool).await?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
