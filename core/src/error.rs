//! Error types for store operations.
//!
//! # Design
//! `NotFound` names the kind of record that was missing because create-todo
//! can fail on either its owner or, for updates, the todo itself. The conflict
//! variants are split per resource so the message matches what was duplicated.

use std::fmt;

use thiserror::Error;

/// The kind of record a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Todo,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::User => write!(f, "User"),
            Resource::Todo => write!(f, "Todo"),
        }
    }
}

/// Errors returned by `Store` write and lookup operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No stored record has the requested id.
    #[error("{0} not found")]
    NotFound(Resource),

    /// A todo with the same id, or the same title ignoring case, is stored.
    #[error("A todo with the same title or id already exists")]
    TodoConflict,

    /// A user with the same id is stored.
    #[error("A user with the same id already exists")]
    UserConflict,
}

/// Returned when a string is not one of the status wire values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status `{0}`, expected one of: pending, in progress, completed")]
pub struct ParseStatusError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_resource() {
        assert_eq!(StoreError::NotFound(Resource::User).to_string(), "User not found");
        assert_eq!(StoreError::NotFound(Resource::Todo).to_string(), "Todo not found");
    }

    #[test]
    fn parse_status_error_echoes_input() {
        let err = ParseStatusError("done".to_string());
        assert!(err.to_string().contains("`done`"));
    }
}
