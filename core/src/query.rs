//! Join todos with their owners, then narrow by status and title search.
//!
//! # Design
//! The two filters look at disjoint fields, so their order does not change
//! the result. `TodoQuery::apply` runs them after the join to match what the
//! list endpoint returns.

use crate::types::{Status, TodoItem, TodoView, User};

/// Filters for listing todos. `status: None` means every status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQuery {
    pub status: Option<Status>,
    pub search: Option<String>,
}

impl TodoQuery {
    pub fn apply(&self, todos: &[TodoItem], users: &[User]) -> Vec<TodoView> {
        let mut views = join_todos_with_owner(todos, users);
        if let Some(status) = self.status {
            views = filter_by_status(views, status);
        }
        if let Some(q) = self.search.as_deref().filter(|q| !q.is_empty()) {
            views = search_by_title(views, q);
        }
        views
    }
}

/// Attach each todo's owner, preserving the input order.
pub fn join_todos_with_owner(todos: &[TodoItem], users: &[User]) -> Vec<TodoView> {
    todos
        .iter()
        .map(|todo| TodoView::new(todo, users.iter().find(|user| user.id == todo.user_id)))
        .collect()
}

pub fn filter_by_status(views: Vec<TodoView>, status: Status) -> Vec<TodoView> {
    views.into_iter().filter(|view| view.status == status).collect()
}

/// Keep views whose title contains `q`, ignoring case.
pub fn search_by_title(views: Vec<TodoView>, q: &str) -> Vec<TodoView> {
    let needle = q.to_lowercase();
    views
        .into_iter()
        .filter(|view| view.title.to_lowercase().contains(&needle))
        .collect()
}
