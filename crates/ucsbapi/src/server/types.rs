use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::db::DbError;

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller's role does not reach the route's requirement
    #[error("Access Denied")]
    Forbidden,

    /// No record is stored under the requested key
    #[error("{entity} with id {id} not found")]
    EntityNotFound { entity: &'static str, id: String },

    /// A query parameter or request body was missing or malformed
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Database(#[from] DbError),
}

impl ApiError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        ApiError::EntityNotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::EntityNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the `type` field in the error payload.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Forbidden => "AccessDeniedException",
            ApiError::EntityNotFound { .. } => "EntityNotFoundException",
            ApiError::Validation(_) => "ValidationException",
            ApiError::Database(_) => "DatabaseException",
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref e) = self {
            error!("Database failure: {}", e);
        }

        let body = ApiErrorBody {
            kind: self.kind(),
            message: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// Confirmation returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}
