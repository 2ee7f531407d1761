//! # People Handlers
//!
//! CRUD handlers for the people resource. Every route here sits behind the
//! auth guard, so the caller's [`Claims`] are always present in extensions.
//!
//! Ownership is enforced on all five operations, not just list and create:
//! the repository scopes every query by owner, and a person that exists but
//! belongs to another user answers 404 exactly like one that does not exist.

use axum::{
    extract::{Extension, Json, Path, State},
    http::StatusCode,
};
use lib_auth::Claims;
use lib_core::{
    dto::{PersonCreateRequest, PersonUpdateRequest},
    model::store::{
        models::{Person, PersonForCreate, PersonForUpdate},
        PersonRepository,
    },
    AppError, DbPool,
};
use tracing::{debug, info};

/// `GET /people` - list all people owned by the caller.
pub async fn index(
    State(pool): State<DbPool>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Person>>, AppError> {
    debug!("[PEOPLE] Listing people for {}", claims.username);

    let people = PersonRepository::list_by_owner(&pool, &claims.username).await?;

    Ok(Json(people))
}

/// `POST /people` - create a person owned by the caller.
pub async fn create(
    State(pool): State<DbPool>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<PersonCreateRequest>,
) -> Result<Json<Person>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("Name must not be empty".to_string()));
    }

    let person = PersonRepository::create(
        &pool,
        PersonForCreate {
            name: req.name,
            image: req.image,
            title: req.title,
            // Owner comes from the verified token, never from the body
            owner_username: claims.username.clone(),
        },
    )
    .await?;

    info!(
        "[PEOPLE] Created person {} for {}",
        person.id, claims.username
    );

    Ok(Json(person))
}

/// `GET /people/{id}` - fetch one person owned by the caller.
pub async fn show(
    State(pool): State<DbPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<Json<Person>, AppError> {
    let person = PersonRepository::find_by_id(&pool, id, &claims.username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Person {}", id)))?;

    Ok(Json(person))
}

/// `PUT /people/{id}` - partially update one person owned by the caller.
pub async fn update(
    State(pool): State<DbPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(req): Json<PersonUpdateRequest>,
) -> Result<Json<Person>, AppError> {
    if let Some(ref name) = req.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }
    }

    let update = PersonForUpdate {
        name: req.name,
        image: req.image,
        title: req.title,
    };

    let person = PersonRepository::update(&pool, id, &claims.username, update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Person {}", id)))?;

    info!(
        "[PEOPLE] Updated person {} for {}",
        person.id, claims.username
    );

    Ok(Json(person))
}

/// `DELETE /people/{id}` - delete one person owned by the caller.
pub async fn destroy(
    State(pool): State<DbPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = PersonRepository::delete(&pool, id, &claims.username).await?;

    if !deleted {
        return Err(AppError::NotFound(format!("Person {}", id)));
    }

    info!("[PEOPLE] Deleted person {} for {}", id, claims.username);

    Ok(StatusCode::NO_CONTENT)
}
