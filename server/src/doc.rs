//! OpenAPI document for the REST API.
//!
//! Registers every handler under the `todos` or `users` tag along with the
//! record, envelope and error schemas. Served at `/openapi.json`.

use todo_core::{Status, TodoItem, TodoUpdate, TodoView, User, UserUpdate};
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::todos::{self, Deleted};
use crate::users;
use crate::Envelope;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        description = "A simple todo API",
        version = "0.0.1"
    ),
    paths(
        todos::list_todos,
        todos::get_todo,
        todos::create_todo,
        todos::update_todo,
        todos::delete_todo,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
    ),
    components(schemas(
        Status,
        User,
        UserUpdate,
        TodoItem,
        TodoUpdate,
        TodoView,
        Deleted,
        ErrorBody,
        Envelope<TodoItem>,
        Envelope<User>,
    )),
    tags(
        (name = "todos", description = "To-do items and their owners"),
        (name = "users", description = "Users who own to-do items")
    )
)]
pub struct ApiDoc;
