//! Sample records loaded into a fresh store at startup.

use crate::types::{Status, TodoItem, User};

pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        },
        User {
            id: 2,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        },
    ]
}

pub fn todos() -> Vec<TodoItem> {
    vec![
        TodoItem {
            id: 1,
            user_id: 2,
            title: "Buy groceries".to_string(),
            description: "Buy groceries from the supermarket".to_string(),
            status: Status::Pending,
        },
        TodoItem {
            id: 2,
            user_id: 1,
            title: "Do laundry".to_string(),
            description: "Do laundry and fold clothes".to_string(),
            status: Status::Pending,
        },
    ]
}
