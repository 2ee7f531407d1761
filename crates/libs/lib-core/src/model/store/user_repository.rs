//! # User Repository
//!
//! Database access layer for user records (the credential store).
//!
//! Uniqueness of `username` is enforced by a UNIQUE constraint; a violating
//! insert surfaces as [`AppError::DuplicateUsername`](crate::error::AppError)
//! through the `From<sqlx::Error>` conversion.

use super::models::User;
use super::DbPool;
use sqlx::query_as;

/// Repository for user records.
///
/// Deliberately exposes no update or delete: users are immutable once
/// created.
pub struct UserRepository;

impl UserRepository {
    /// Find a user by username.
    ///
    /// Returns `Ok(None)` when no user has that username.
    pub async fn find_by_username(
        pool: &DbPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Create a new user with an already-hashed password.
    ///
    /// Fails with a unique constraint violation when the username is taken.
    pub async fn create(
        pool: &DbPool,
        username: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(pool)
            .await?;

        let id = result.last_insert_rowid();

        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use sqlx::sqlite::SqlitePoolOptions;

    /// Create an in-memory SQLite database for testing
    async fn setup_test_db() -> DbPool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&pool)
        .await
        .expect("Failed to create users table");

        pool
    }

    // A store-layer test only needs an opaque hash, not a real one.
    const HASH: &str = "$2b$10$abcdefghijklmnopqrstuvabcdefghijklmnopqrstuvabcdefghi";

    #[tokio::test]
    async fn test_create_user() {
        let pool = setup_test_db().await;

        let user = UserRepository::create(&pool, "testuser", HASH)
            .await
            .expect("user creation should succeed");

        assert_eq!(user.username, "testuser");
        assert_eq!(user.password_hash, HASH);
        assert!(user.id > 0);
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let pool = setup_test_db().await;

        UserRepository::create(&pool, "testuser", HASH)
            .await
            .expect("first creation should succeed");

        let result = UserRepository::create(&pool, "testuser", "another-hash").await;

        let err = result.expect_err("duplicate username should be rejected");
        assert!(matches!(
            AppError::from(err),
            AppError::DuplicateUsername(_)
        ));
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let pool = setup_test_db().await;

        UserRepository::create(&pool, "testuser", HASH)
            .await
            .expect("user creation should succeed");

        let found = UserRepository::find_by_username(&pool, "testuser")
            .await
            .expect("lookup should succeed");

        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_find_by_username_not_found() {
        let pool = setup_test_db().await;

        let found = UserRepository::find_by_username(&pool, "nonexistent")
            .await
            .expect("lookup should succeed");

        assert!(found.is_none());
    }
}
