//! User CRUD handlers
//!
//! Each handler performs exactly one repository call and maps its outcome
//! to a status code. Failures never cross a handler boundary unmapped:
//! everything funnels through [`Error`]'s response conversion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{Error, Result};
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::repository::{RepositoryError, UserRepository};
use crate::state::AppState;

/// Acquire a repository over the shared client, failing the request if the
/// connection has not been established yet
async fn user_repository(state: &AppState) -> Result<UserRepository> {
    let db = state
        .db()
        .await
        .ok_or_else(|| RepositoryError::connection_failed("database connection not established"))?;
    Ok(UserRepository::new(db))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "A list of users", body = [User]),
        (status = 500, description = "Server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let repo = user_repository(&state).await?;
    let users = repo.find_all().await?;

    tracing::debug!(count = users.len(), "listed users");
    Ok(Json(users.into_iter().map(User::from).collect()))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "The user id")
    ),
    responses(
        (status = 200, description = "A single user", body = User),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let repo = user_repository(&state).await?;
    let user = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(User::from(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created new user", body = User),
        (status = 400, description = "Name is required", body = crate::error::ErrorResponse),
        (status = 500, description = "Server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    // Presence check only: the empty string is a legal name
    let name = payload
        .name
        .ok_or_else(|| Error::Validation("Name is required".to_string()))?;

    let repo = user_repository(&state).await?;
    let user = repo.create(name).await?;

    tracing::info!(id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(User::from(user))))
}

/// Update a user's name
///
/// No presence check on this path: a body without `name` overwrites the
/// stored value with the empty string. The merge is a single atomic store
/// call, so a record deleted concurrently simply reports not-found.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    request_body = UpdateUserRequest,
    params(
        ("id" = String, Path, description = "ID of the user to update")
    ),
    responses(
        (status = 200, description = "The updated user", body = User),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>> {
    let repo = user_repository(&state).await?;
    let updated = repo
        .update_name(&id, payload.name.unwrap_or_default())
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    tracing::info!(id = %id, "user updated");
    Ok(Json(User::from(updated)))
}

/// Delete a user by id
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 202, description = "User deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, &'static str)> {
    let repo = user_repository(&state).await?;
    repo.delete(&id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    tracing::info!(id = %id, "user deleted");
    Ok((StatusCode::ACCEPTED, "User deleted"))
}
