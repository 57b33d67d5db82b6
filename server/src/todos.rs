//! `/todos` handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Deserializer, Serialize};
use todo_core::{Status, TodoItem, TodoQuery, TodoUpdate, TodoView};
use tracing::{debug, info};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ApiError, ErrorBody};
use crate::extract::{ResourceId, ValidJson, ValidQuery};
use crate::{Db, Envelope};

/// Query string of `GET /todos`.
///
/// `status=All` (any case) is the same as leaving `status` out.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTodosParams {
    /// The status of the todo items to get: `pending`, `in progress`,
    /// `completed`, or `All`.
    #[serde(default, deserialize_with = "status_filter")]
    #[param(value_type = Option<String>, example = "pending")]
    pub status: Option<Status>,
    /// The search query string, matched against titles ignoring case.
    #[serde(default)]
    pub q: Option<String>,
}

impl From<ListTodosParams> for TodoQuery {
    fn from(params: ListTodosParams) -> Self {
        TodoQuery {
            status: params.status,
            search: params.q,
        }
    }
}

fn status_filter<'de, D>(deserializer: D) -> Result<Option<Status>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct Deleted {
    pub delete: bool,
}

#[utoipa::path(
    get,
    path = "/todos",
    params(ListTodosParams),
    responses(
        (status = 200, description = "Todos joined with their owners", body = [TodoView]),
        (status = 422, description = "Invalid status filter", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn list_todos(
    State(db): State<Db>,
    ValidQuery(params): ValidQuery<ListTodosParams>,
) -> Json<Vec<TodoView>> {
    let query = TodoQuery::from(params);
    let todos = db.read().await.list_todos(&query);
    debug!(status = ?query.status, search = ?query.search, count = todos.len(), "listed todos");
    Json(todos)
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "The ID of the todo item to get")),
    responses(
        (status = 200, description = "The todo joined with its owner", body = TodoView),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 422, description = "Invalid id", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn get_todo(
    State(db): State<Db>,
    ResourceId(id): ResourceId,
) -> Result<Json<TodoView>, ApiError> {
    let todo = db.read().await.todo_view(id)?;
    Ok(Json(todo))
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body(content = TodoItem, description = "The todo item to create"),
    responses(
        (status = 201, description = "Created", body = Envelope<TodoItem>),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 409, description = "A todo with the same title or id already exists", body = ErrorBody),
        (status = 422, description = "Invalid body", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn create_todo(
    State(db): State<Db>,
    ValidJson(input): ValidJson<TodoItem>,
) -> Result<(StatusCode, Json<Envelope<TodoItem>>), ApiError> {
    let mut store = db.write().await;
    let todo = store.create_todo(input)?;
    info!(todo_id = todo.id, user_id = todo.user_id, "created todo");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(StatusCode::CREATED, todo)),
    ))
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "The ID of the todo item to update")),
    request_body(content = TodoUpdate, description = "The todo fields to update"),
    responses(
        (status = 200, description = "Updated", body = Envelope<TodoItem>),
        (status = 404, description = "Todo or user not found", body = ErrorBody),
        (status = 409, description = "Title used by another todo", body = ErrorBody),
        (status = 422, description = "Invalid id or body", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn update_todo(
    State(db): State<Db>,
    ResourceId(id): ResourceId,
    ValidJson(input): ValidJson<TodoUpdate>,
) -> Result<Json<Envelope<TodoItem>>, ApiError> {
    let mut store = db.write().await;
    let todo = store.update_todo(id, input)?.clone();
    info!(todo_id = id, status = %todo.status, "updated todo");
    Ok(Json(Envelope::new(StatusCode::OK, todo)))
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "The ID of the todo item to delete")),
    responses(
        (status = 200, description = "Deleted", body = Envelope<Deleted>),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 422, description = "Invalid id", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn delete_todo(
    State(db): State<Db>,
    ResourceId(id): ResourceId,
) -> Result<Json<Envelope<Deleted>>, ApiError> {
    db.write().await.delete_todo(id)?;
    info!(todo_id = id, "deleted todo");
    Ok(Json(Envelope::new(StatusCode::OK, Deleted { delete: true })))
}
