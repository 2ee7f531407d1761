use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User account record.
///
/// Users are created at signup and never mutated or deleted; there are no
/// update or delete operations in the store.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Person record, always owned by the user who created it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub title: Option<String>,
    pub owner_username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new person.
///
/// `owner_username` is stamped from the authenticated caller, never taken
/// from client input.
#[derive(Debug, Clone)]
pub struct PersonForCreate {
    pub name: String,
    pub image: Option<String>,
    pub title: Option<String>,
    pub owner_username: String,
}

/// Partial update for an existing person.
///
/// Only `Some` fields are written; everything else is left untouched.
#[derive(Debug, Clone, Default)]
pub struct PersonForUpdate {
    pub name: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
}

impl PersonForUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    pub fn title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none() && self.title.is_none()
    }
}
