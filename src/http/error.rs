//! Central translation of service failures into HTTP responses.

use crate::task::{domain::TaskDomainError, services::TaskServiceError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// Message returned for any request that cannot be decoded or processed.
pub const BAD_REQUEST_MESSAGE: &str = "The request cannot be fulfilled due to bad syntax.";

/// JSON body returned with every error status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Reason phrase of the status code.
    pub error: String,
    /// Human-readable description of the failure.
    pub message: String,
    /// Field-level details, when any apply.
    pub details: Option<Vec<String>>,
}

/// Errors produced by task handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request data violated a business rule.
    #[error("{message}")]
    Unprocessable {
        /// Failure description.
        message: String,
        /// Field-level details.
        details: Vec<String>,
    },

    /// The request conflicts with an existing task.
    #[error("{0}")]
    Conflict(String),

    /// The referenced task does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request could not be decoded or fulfilled.
    #[error("{}", BAD_REQUEST_MESSAGE)]
    BadRequest,
}

impl ApiError {
    /// Returns the status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest => StatusCode::BAD_REQUEST,
        }
    }

    /// Builds the JSON body for this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        let status = self.status();
        let details = match self {
            Self::Unprocessable { details, .. } => Some(details.clone()),
            Self::Conflict(_) | Self::NotFound(_) | Self::BadRequest => None,
        };
        ErrorBody {
            error: status.canonical_reason().unwrap_or("Error").to_owned(),
            message: self.to_string(),
            details,
        }
    }
}

fn field_of(err: &TaskDomainError) -> &'static str {
    match err {
        TaskDomainError::EmptyTitle | TaskDomainError::TitleTooLong { .. } => "title",
        TaskDomainError::ExpirationNotInFuture { .. }
        | TaskDomainError::ExpirationBeforeCreation { .. } => "expirationDate",
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(domain) => {
                let message = domain.to_string();
                Self::Unprocessable {
                    details: vec![format!("{}: {message}", field_of(&domain))],
                    message,
                }
            }
            TaskServiceError::TitleConflict(_) => Self::Conflict(err.to_string()),
            TaskServiceError::NotFound(_) => Self::NotFound(err.to_string()),
            TaskServiceError::Repository(source) => {
                error!(error = %source, "task store failure");
                Self::BadRequest
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(reason = %rejection.body_text(), "rejected request body");
        Self::BadRequest
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        debug!(reason = %rejection.body_text(), "rejected path parameter");
        Self::BadRequest
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
