//! # People DTOs
//!
//! Person responses serialize the [`Person`](crate::model::store::models::Person)
//! model directly; only the request shapes live here. Any client-supplied
//! owner field is ignored — the owner is always the authenticated caller.

use serde::{Deserialize, Serialize};

/// Request body for `POST /people`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCreateRequest {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Request body for `PUT /people/{id}`. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonUpdateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
