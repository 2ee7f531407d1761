//! # Auth Handler Tests
//!
//! Test suite for the signup and login handlers, driving the real router
//! (including middleware) against an in-memory SQLite database.

mod login;

use crate::server::{create_router, AppState};
use axum::body::Body;
use axum::http::Request;
use axum::Router;
use lib_core::{Config, DbPool};
use sqlx::sqlite::SqlitePoolOptions;

/// Setup test database with schema
pub async fn setup_test_db() -> DbPool {
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

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            image TEXT,
            title TEXT,
            owner_username TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create people table");

    pool
}

/// Create test config (low bcrypt cost to keep tests fast)
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret-key-must-be-at-least-32-characters-long!".to_string(),
        jwt_expiration_hours: 1,
        bcrypt_cost: 4,
    }
}

/// Create a test app wired exactly like production
pub async fn test_app() -> Router {
    let state = AppState {
        db: setup_test_db().await,
        config: test_config(),
    };

    create_router(state)
}

/// Build a JSON POST request
pub fn post_json(uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).expect("serialize")))
        .expect("request")
}

/// Deserialize a response body
pub async fn body_json<T: serde::de::DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("deserialize body")
}
