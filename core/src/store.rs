//! In-memory record store for users and todos.
//!
//! # Design
//! Both collections are `Vec`s kept in insertion order, which is also the
//! listing order. Lookups are linear scans. Every write validates its whole
//! input before touching a stored record, so an `Err` means nothing changed.
//! The store is not synchronized; share it behind one lock.

use crate::error::{Resource, StoreError};
use crate::query::TodoQuery;
use crate::seed;
use crate::types::{TodoId, TodoItem, TodoUpdate, TodoView, User, UserId, UserUpdate};
use crate::validate;

#[derive(Debug, Clone, Default)]
pub struct Store {
    users: Vec<User>,
    todos: Vec<TodoItem>,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the sample users and todos.
    pub fn seeded() -> Self {
        Self {
            users: seed::users(),
            todos: seed::todos(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn user(&self, id: UserId) -> Result<&User, StoreError> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or(StoreError::NotFound(Resource::User))
    }

    pub fn todo(&self, id: TodoId) -> Result<&TodoItem, StoreError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(Resource::Todo))
    }

    /// The todo `id` joined with its owner.
    pub fn todo_view(&self, id: TodoId) -> Result<TodoView, StoreError> {
        let todo = self.todo(id)?;
        let owner = self.users.iter().find(|user| user.id == todo.user_id);
        Ok(TodoView::new(todo, owner))
    }

    pub fn list_todos(&self, query: &TodoQuery) -> Vec<TodoView> {
        query.apply(&self.todos, &self.users)
    }

    /// Append `user` and return it.
    pub fn create_user(&mut self, user: User) -> Result<User, StoreError> {
        if validate::user_exists(&self.users, user.id) {
            return Err(StoreError::UserConflict);
        }
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn update_user(&mut self, id: UserId, update: UserUpdate) -> Result<&User, StoreError> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(StoreError::NotFound(Resource::User))?;
        update.apply_to(user);
        Ok(&*user)
    }

    /// Append `todo` and return it. The owner is checked before uniqueness.
    pub fn create_todo(&mut self, todo: TodoItem) -> Result<TodoItem, StoreError> {
        if !validate::user_exists(&self.users, todo.user_id) {
            return Err(StoreError::NotFound(Resource::User));
        }
        if validate::todo_conflicts(&self.todos, &todo) {
            return Err(StoreError::TodoConflict);
        }
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Apply `update` to the todo `id` once every present field has passed
    /// validation. A new owner must exist and a new title must not clash with
    /// another todo.
    pub fn update_todo(&mut self, id: TodoId, update: TodoUpdate) -> Result<&TodoItem, StoreError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(Resource::Todo))?;
        if let Some(user_id) = update.user_id {
            if !validate::user_exists(&self.users, user_id) {
                return Err(StoreError::NotFound(Resource::User));
            }
        }
        if let Some(title) = update.title.as_deref() {
            if validate::title_taken(&self.todos, title, id) {
                return Err(StoreError::TodoConflict);
            }
        }
        update.apply_to(&mut self.todos[index]);
        Ok(&self.todos[index])
    }

    pub fn delete_todo(&mut self, id: TodoId) -> Result<TodoItem, StoreError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(Resource::Todo))?;
        Ok(self.todos.remove(index))
    }
}
