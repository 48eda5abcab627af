use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::types::SubmissionStatus;
use crate::services::grading::GradingResult;

pub(crate) const DEFAULT_UPLOAD_FILENAME: &str = "unknown.pdf";
pub(crate) const DEFAULT_UPLOAD_FILE_TYPE: &str = "application/pdf";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListSubmissionsQuery {
    #[serde(default)]
    pub(crate) status: Option<SubmissionStatus>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GradeSubmissionResponse {
    pub(crate) submission_id: String,
    pub(crate) student_name: String,
    pub(crate) filename: String,
    pub(crate) assignment_type: String,
    #[serde(flatten)]
    pub(crate) result: GradingResult,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReleaseResponse {
    pub(crate) message: &'static str,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub(crate) struct UploadGradeRequest {
    #[validate(length(min = 1, max = 255, message = "filename must be 1-255 characters"))]
    pub(crate) filename: Option<String>,
    #[validate(length(max = 255, message = "file_type must be at most 255 characters"))]
    pub(crate) file_type: Option<String>,
}

impl UploadGradeRequest {
    pub(crate) fn filename(&self) -> &str {
        self.filename.as_deref().unwrap_or(DEFAULT_UPLOAD_FILENAME)
    }

    pub(crate) fn file_type(&self) -> &str {
        self.file_type.as_deref().unwrap_or(DEFAULT_UPLOAD_FILE_TYPE)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UploadGradingResult {
    pub(crate) filename: String,
    pub(crate) assignment_type: String,
    #[serde(flatten)]
    pub(crate) result: GradingResult,
}

#[derive(Debug, Serialize)]
pub(crate) struct UploadGradeResponse {
    pub(crate) success: bool,
    pub(crate) grading_result: UploadGradingResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_request_defaults() {
        let request: UploadGradeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.filename(), "unknown.pdf");
        assert_eq!(request.file_type(), "application/pdf");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn upload_request_rejects_empty_and_long_filenames() {
        let empty = UploadGradeRequest { filename: Some(String::new()), file_type: None };
        assert!(empty.validate().is_err());

        let long = UploadGradeRequest { filename: Some("a".repeat(256)), file_type: None };
        assert!(long.validate().is_err());
    }

    #[test]
    fn list_query_parses_status() {
        let query: ListSubmissionsQuery =
            serde_json::from_value(serde_json::json!({"status": "pending_grading"})).unwrap();
        assert_eq!(query.status, Some(SubmissionStatus::PendingGrading));
    }
}
