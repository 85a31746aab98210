//! API error handling utilities.
//!
//! Every error leaves the API as a `{"message": ...}` body so clients can
//! always read one field regardless of status code.

use crate::storage::StorageError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

/// Message body shared by error responses and delete confirmations.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API error response
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body, unknown field, bad path parameter or duplicate id.
    Validation(String),
    /// No record of this kind under the requested id. Carries the kind name
    /// so the body reads "Vessel not found", "Voyage not found" and so on.
    NotFound(&'static str),
    /// Storage failure. The detail goes to the log, not to the client.
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate { .. } => ApiError::Validation(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Validation(message) => message,
            ApiError::NotFound(kind) => format!("{kind} not found"),
            ApiError::Internal(detail) => {
                error!("request failed: {detail}");
                "Internal server error".to_string()
            }
        };

        (status, Json(MessageBody::new(message))).into_response()
    }
}
