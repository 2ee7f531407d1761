//! # Person Repository
//!
//! Database access layer for the people resource. Every query is scoped by
//! `owner_username`: a person that exists but belongs to someone else is
//! indistinguishable from one that does not exist.

use super::models::{Person, PersonForCreate, PersonForUpdate};
use super::DbPool;
use sqlx::query_as;

/// Repository for person records.
pub struct PersonRepository;

impl PersonRepository {
    /// List all people owned by the given user.
    pub async fn list_by_owner(pool: &DbPool, owner: &str) -> Result<Vec<Person>, sqlx::Error> {
        query_as::<_, Person>("SELECT * FROM people WHERE owner_username = ? ORDER BY id")
            .bind(owner)
            .fetch_all(pool)
            .await
    }

    /// Create a new person record.
    pub async fn create(pool: &DbPool, data: PersonForCreate) -> Result<Person, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO people (name, image, title, owner_username) VALUES (?, ?, ?, ?)",
        )
        .bind(&data.name)
        .bind(&data.image)
        .bind(&data.title)
        .bind(&data.owner_username)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();

        query_as::<_, Person>("SELECT * FROM people WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find one person by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &DbPool,
        id: i64,
        owner: &str,
    ) -> Result<Option<Person>, sqlx::Error> {
        query_as::<_, Person>("SELECT * FROM people WHERE id = ? AND owner_username = ?")
            .bind(id)
            .bind(owner)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update to a person owned by the given user.
    ///
    /// Returns `Ok(None)` when the person does not exist or is owned by
    /// someone else.
    pub async fn update(
        pool: &DbPool,
        id: i64,
        owner: &str,
        data: PersonForUpdate,
    ) -> Result<Option<Person>, sqlx::Error> {
        if Self::find_by_id(pool, id, owner).await?.is_none() {
            return Ok(None);
        }

        if data.is_empty() {
            return Self::find_by_id(pool, id, owner).await;
        }

        // Build the SET clause dynamically from the provided fields
        let mut updates = Vec::new();

        if data.name.is_some() {
            updates.push("name = ?");
        }
        if data.image.is_some() {
            updates.push("image = ?");
        }
        if data.title.is_some() {
            updates.push("title = ?");
        }
        updates.push("updated_at = CURRENT_TIMESTAMP");

        let query_str = format!(
            "UPDATE people SET {} WHERE id = ? AND owner_username = ?",
            updates.join(", ")
        );

        let mut query = sqlx::query(&query_str);

        if let Some(ref name) = data.name {
            query = query.bind(name);
        }
        if let Some(ref image) = data.image {
            query = query.bind(image);
        }
        if let Some(ref title) = data.title {
            query = query.bind(title);
        }

        query.bind(id).bind(owner).execute(pool).await?;

        Self::find_by_id(pool, id, owner).await
    }

    /// Delete a person owned by the given user.
    ///
    /// Returns `Ok(true)` when a row was deleted, `Ok(false)` when nothing
    /// matched.
    pub async fn delete(pool: &DbPool, id: i64, owner: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM people WHERE id = ? AND owner_username = ?")
            .bind(id)
            .bind(owner)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
