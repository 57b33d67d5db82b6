//! HTTP surface for the users-and-todos store.
//!
//! # Design
//! - The whole `Store` sits behind one `tokio::sync::RwLock`. Reads share the
//!   lock; each write handler holds the write lock across its check and its
//!   mutation, so two creates for the same id cannot both succeed.
//! - Path ids, JSON bodies and query strings go through the extractors in
//!   `extract`, which turn every rejection into a 422 `ApiError`.
//! - Write endpoints answer with an `Envelope` of `{status, data}`; reads
//!   return the bare records.
//! - The OpenAPI document is served at `/openapi.json` with Swagger UI at
//!   `/docs`.

pub mod config;
pub mod doc;
pub mod error;
pub mod extract;
pub mod telemetry;
pub mod todos;
pub mod users;

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use serde::{Deserialize, Serialize};
use todo_core::Store;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;

pub use error::ApiError;

pub type Db = Arc<RwLock<Store>>;

/// Body of every successful write: the HTTP status repeated alongside the
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    pub status: u16,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            data,
        }
    }
}

pub fn app(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/{id}",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user).put(users::update_user))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

/// Serve `store` on `listener` until Ctrl-C.
pub async fn run(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for ctrl-c, serving until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_carries_numeric_status() {
        let envelope = Envelope::new(StatusCode::CREATED, "payload");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], 201);
        assert_eq!(json["data"], "payload");
    }
}
