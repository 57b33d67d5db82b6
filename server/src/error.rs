//! Mapping from request and store failures to JSON error responses.
//!
//! Every error body has the shape
//! `{"error": <code>, "detail": <message>, "field": <name>?}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::StoreError;
use tracing::warn;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input, rejected before any handler logic.
    #[error("{message}")]
    Validation {
        field: Option<&'static str>,
        message: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Serialized form of an `ApiError`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    pub fn validation(field: Option<&'static str>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::TodoConflict | StoreError::UserConflict) => {
                StatusCode::CONFLICT
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::Store(StoreError::NotFound(_)) => "not_found",
            ApiError::Store(_) => "conflict",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "request rejected");
        let field = match &self {
            ApiError::Validation { field, .. } => field.map(str::to_string),
            ApiError::Store(_) => None,
        };
        let body = ErrorBody {
            error: self.code().to_string(),
            detail: self.to_string(),
            field,
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(None, rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::validation(None, rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::validation(Some("id"), rejection.body_text())
    }
}
