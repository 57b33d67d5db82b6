//! `/users` handlers.

use axum::{extract::State, http::StatusCode, Json};
use todo_core::{User, UserUpdate};
use tracing::info;

use crate::error::{ApiError, ErrorBody};
use crate::extract::{ResourceId, ValidJson};
use crate::{Db, Envelope};

#[utoipa::path(
    get,
    path = "/users",
    responses((status = 200, description = "All users", body = [User])),
    tag = "users"
)]
pub async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let users = db.read().await.users().to_vec();
    Json(users)
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "The ID of the user to get")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Invalid id", body = ErrorBody)
    ),
    tag = "users"
)]
pub async fn get_user(
    State(db): State<Db>,
    ResourceId(id): ResourceId,
) -> Result<Json<User>, ApiError> {
    let user = db.read().await.user(id)?.clone();
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body(content = User, description = "The user to create"),
    responses(
        (status = 201, description = "Created", body = Envelope<User>),
        (status = 409, description = "A user with the same id already exists", body = ErrorBody),
        (status = 422, description = "Invalid body", body = ErrorBody)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(db): State<Db>,
    ValidJson(input): ValidJson<User>,
) -> Result<(StatusCode, Json<Envelope<User>>), ApiError> {
    let mut store = db.write().await;
    let user = store.create_user(input)?;
    info!(user_id = user.id, "created user");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(StatusCode::CREATED, user)),
    ))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "The ID of the user to update")),
    request_body(content = UserUpdate, description = "The user fields to update"),
    responses(
        (status = 200, description = "Updated", body = Envelope<User>),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Invalid id or body", body = ErrorBody)
    ),
    tag = "users"
)]
pub async fn update_user(
    State(db): State<Db>,
    ResourceId(id): ResourceId,
    ValidJson(input): ValidJson<UserUpdate>,
) -> Result<Json<Envelope<User>>, ApiError> {
    let mut store = db.write().await;
    let user = store.update_user(id, input)?.clone();
    info!(user_id = id, "updated user");
    Ok(Json(Envelope::new(StatusCode::OK, user)))
}
