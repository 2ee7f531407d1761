//! # Database Store
//!
//! Connection pool and repository implementations.

// region:    --- Modules
pub mod models;
pub mod person_repository;
pub mod user_repository;
// endregion: --- Modules

// region:    --- Re-exports
pub use person_repository::PersonRepository;
pub use user_repository::UserRepository;
// endregion: --- Re-exports

use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};

/// Type alias for the SQLite connection pool.
pub type DbPool = SqlitePool;

/// Create a new SQLite connection pool for the given database URL.
///
/// The URL is injected by the caller rather than read from the environment,
/// so tests and the server construct their own pools explicitly.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;

    Ok(pool)
}
