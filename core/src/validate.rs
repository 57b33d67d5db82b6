//! Read-only checks run before a write is applied.

use crate::types::{TodoId, TodoItem, User, UserId};

/// True iff some stored user has `user_id`.
pub fn user_exists(users: &[User], user_id: UserId) -> bool {
    users.iter().any(|user| user.id == user_id)
}

/// True iff some stored todo has the candidate's id, or its title ignoring case.
pub fn todo_conflicts(todos: &[TodoItem], candidate: &TodoItem) -> bool {
    todos
        .iter()
        .any(|todo| todo.id == candidate.id || same_title(&todo.title, &candidate.title))
}

/// True iff a todo other than `except` already uses `title`, ignoring case.
pub fn title_taken(todos: &[TodoItem], title: &str, except: TodoId) -> bool {
    todos
        .iter()
        .any(|todo| todo.id != except && same_title(&todo.title, title))
}

fn same_title(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
