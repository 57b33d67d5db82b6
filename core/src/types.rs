//! Records held by the store and the payloads that create or change them.
//!
//! # Design
//! Ids are assigned by the caller, not generated here. Update payloads use
//! `Option` per field: a present field is written, an absent one is left
//! alone. Presence is the only test, so `0` and `""` are real values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseStatusError;

pub type UserId = i64;
pub type TodoId = i64;

/// Progress of a todo item.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in progress", alias = "in_progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl Status {
    /// The value used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in progress",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "in progress" | "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

/// Partial update for a user. Omitted fields keep their stored value.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl UserUpdate {
    pub(crate) fn apply_to(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
    }
}

/// A to-do item as stored, owned by the user `user_id`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: Status,
}

/// Partial update for a todo. Omitted fields keep their stored value.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl TodoUpdate {
    pub(crate) fn apply_to(self, todo: &mut TodoItem) {
        if let Some(user_id) = self.user_id {
            todo.user_id = user_id;
        }
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(description) = self.description {
            todo.description = description;
        }
        if let Some(status) = self.status {
            todo.status = status;
        }
    }
}

/// A todo joined with its owner, as returned by the read endpoints.
///
/// `user_id` is replaced by the full `user` record. When the owner is no
/// longer stored the `user` key is left out of the JSON entirely.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl TodoView {
    pub fn new(todo: &TodoItem, owner: Option<&User>) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            description: todo.description.clone(),
            status: todo.status,
            user: owner.cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn laundry() -> TodoItem {
        TodoItem {
            id: 2,
            user_id: 1,
            title: "Do laundry".to_string(),
            description: "Do laundry and fold clothes".to_string(),
            status: Status::Pending,
        }
    }

    #[rstest]
    #[case::pending("pending", Status::Pending)]
    #[case::in_progress_spaced("in progress", Status::InProgress)]
    #[case::in_progress_underscored("in_progress", Status::InProgress)]
    #[case::completed("completed", Status::Completed)]
    fn status_parses_wire_values(#[case] raw: &str, #[case] expected: Status) {
        assert_eq!(raw.parse::<Status>().unwrap(), expected);
        let json = format!("\"{raw}\"");
        assert_eq!(serde_json::from_str::<Status>(&json).unwrap(), expected);
    }

    #[test]
    fn status_rejects_unknown_value() {
        assert!("done".parse::<Status>().is_err());
        assert!(serde_json::from_str::<Status>("\"All\"").is_err());
    }

    #[test]
    fn in_progress_serializes_with_a_space() {
        let json = serde_json::to_value(Status::InProgress).unwrap();
        assert_eq!(json, "in progress");
        assert_eq!(Status::InProgress.to_string(), "in progress");
    }

    #[test]
    fn todo_status_defaults_to_pending() {
        let todo: TodoItem = serde_json::from_str(
            r#"{"id":3,"user_id":1,"title":"Walk dog","description":"Around the block"}"#,
        )
        .unwrap();
        assert_eq!(todo.status, Status::Pending);
    }

    #[test]
    fn todo_rejects_missing_title() {
        let result: Result<TodoItem, _> =
            serde_json::from_str(r#"{"id":3,"user_id":1,"description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn todo_update_all_fields_optional() {
        let update: TodoUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.user_id.is_none());
        assert!(update.title.is_none());
        assert!(update.description.is_none());
        assert!(update.status.is_none());
    }

    #[test]
    fn todo_update_writes_only_present_fields() {
        let mut todo = laundry();
        let update: TodoUpdate = serde_json::from_str(r#"{"status":"completed"}"#).unwrap();
        update.apply_to(&mut todo);
        assert_eq!(todo.status, Status::Completed);
        assert_eq!(todo.title, "Do laundry");
        assert_eq!(todo.description, "Do laundry and fold clothes");
        assert_eq!(todo.user_id, 1);
    }

    #[test]
    fn todo_update_treats_empty_string_as_a_value() {
        let mut todo = laundry();
        let update = TodoUpdate {
            description: Some(String::new()),
            ..TodoUpdate::default()
        };
        update.apply_to(&mut todo);
        assert_eq!(todo.description, "");
    }

    #[test]
    fn user_update_partial_fields() {
        let mut user = User {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        };
        let update: UserUpdate = serde_json::from_str(r#"{"last_name":"Smith"}"#).unwrap();
        update.apply_to(&mut user);
        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Smith");
    }

    #[test]
    fn view_omits_user_id_and_missing_owner() {
        let view = TodoView::new(&laundry(), None);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("user_id").is_none());
        assert!(json.get("user").is_none());
        assert_eq!(json["title"], "Do laundry");
        assert_eq!(json["status"], "pending");
    }
}
