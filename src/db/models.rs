use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::db::points;
use crate::db::types::SubmissionStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Submission {
    pub(crate) id: String,
    pub(crate) student_name: String,
    pub(crate) student_id: String,
    pub(crate) filename: String,
    pub(crate) assignment_type: String,
    pub(crate) submitted_at: String,
    pub(crate) status: SubmissionStatus,
    pub(crate) questions: Vec<SubmissionQuestion>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "points::option::serialize"
    )]
    pub(crate) total_score: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "points::option::serialize"
    )]
    pub(crate) max_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) graded_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) graded_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) released_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SubmissionQuestion {
    pub(crate) id: String,
    pub(crate) description: String,
    #[serde(serialize_with = "points::serialize")]
    pub(crate) max_points: f64,
    pub(crate) student_answer: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "points::option::serialize"
    )]
    pub(crate) score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) feedback: Option<String>,
}

impl Submission {
    /// Student answers keyed by question id.
    pub(crate) fn answers(&self) -> HashMap<&str, &str> {
        self.questions
            .iter()
            .map(|question| (question.id.as_str(), question.student_answer.as_str()))
            .collect()
    }
}
