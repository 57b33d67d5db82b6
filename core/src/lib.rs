//! Domain core for the users-and-todos service.
//!
//! # Overview
//! Holds users and their to-do items in process memory and answers the
//! questions the HTTP layer asks of them: does this user exist, does this todo
//! collide with a stored one, which todos match a status and a search string.
//! Nothing here knows about HTTP or async runtimes.
//!
//! # Design
//! - `Store` owns both collections in insertion order; every lookup is a
//!   linear scan.
//! - The validators in `validate` and the filters in `query` are free
//!   functions over slices, so they can be exercised without a store.
//! - Writes on `Store` check everything first and only then touch the stored
//!   record, so a rejected request leaves the store unchanged.
//! - Callers that share a `Store` across tasks wrap it in a single lock; the
//!   type itself carries no synchronization.

pub mod error;
pub mod query;
pub mod seed;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{ParseStatusError, Resource, StoreError};
pub use query::TodoQuery;
pub use store::Store;
pub use types::{Status, TodoId, TodoItem, TodoUpdate, TodoView, User, UserId, UserUpdate};
