//! Persistence for `device_configuration`.
//!
//! Connection setup, schema creation, the row model and the repository
//! that performs insert-if-absent upserts.

use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::Connection;

pub mod config;
pub mod models;
pub mod repositories;
pub mod schema;

pub use config::DbConfig;
pub use schema::ensure_schema;

pub type DbPool = sqlx::PgPool;

/// Open the single database connection used for a load run.
///
/// The pool is capped at one connection so every statement of the run
/// executes sequentially on the same session. Statements run outside any
/// explicit transaction and commit individually.
///
/// `PgPoolOptions::connect_with` retries failed connects until its acquire
/// timeout and then reports only `PoolTimedOut`. A direct connection is made
/// first so refused connections, bad credentials and unknown hosts come
/// back as the underlying error.
pub async fn connect(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = config.connect_options();

    let conn = PgConnection::connect_with(&options).await?;
    conn.close().await?;

    PgPoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the connection is usable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}
