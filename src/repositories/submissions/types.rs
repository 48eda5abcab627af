use thiserror::Error;

use crate::db::models::SubmissionQuestion;
use crate::db::types::SubmissionStatus;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum StoreError {
    #[error("submission {0} not found")]
    NotFound(String),
    #[error("submission {id} is {actual}, expected {expected}")]
    InvalidState { id: String, expected: SubmissionStatus, actual: SubmissionStatus },
}

/// Everything a grade transition writes onto the record.
#[derive(Debug, Clone)]
pub(crate) struct GradedUpdate {
    pub(crate) questions: Vec<SubmissionQuestion>,
    pub(crate) total_score: f64,
    pub(crate) max_total: f64,
    pub(crate) percentage: f64,
    pub(crate) graded_at: String,
    pub(crate) graded_by: String,
}
