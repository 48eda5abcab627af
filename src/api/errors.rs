use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::types::SubmissionStatus;
use crate::repositories::submissions::StoreError;
use crate::services::rubrics::RubricError;

#[derive(Debug, Serialize)]
struct NotFoundResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct FailureResponse {
    success: bool,
    error: String,
}

#[derive(Debug, PartialEq)]
pub(crate) enum ApiError {
    NotFound(String),
    InvalidState(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    /// Log the underlying error with context and return an `Internal` variant.
    pub(crate) fn internal(err: impl std::fmt::Display, context: &str) -> Self {
        tracing::error!(error = %err, "{context}");
        Self::Internal(context.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound("Submission not found".to_string()),
            StoreError::InvalidState { expected: SubmissionStatus::PendingGrading, .. } => {
                Self::InvalidState("Submission already graded".to_string())
            }
            StoreError::InvalidState { expected: SubmissionStatus::Graded, .. } => {
                Self::InvalidState("Submission not graded yet".to_string())
            }
            StoreError::InvalidState { .. } => Self::InvalidState(err.to_string()),
        }
    }
}

impl From<RubricError> for ApiError {
    fn from(err: RubricError) -> Self {
        Self::internal(&err, &err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(error) => {
                (StatusCode::NOT_FOUND, Json(NotFoundResponse { error })).into_response()
            }
            ApiError::InvalidState(error) | ApiError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(FailureResponse { success: false, error }))
                    .into_response()
            }
            ApiError::Internal(error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(FailureResponse { success: false, error }))
                    .into_response()
            }
        }
    }
}
