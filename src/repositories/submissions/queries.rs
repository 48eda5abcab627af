use crate::db::models::Submission;
use crate::db::types::SubmissionStatus;
use crate::db::Database;

use super::types::StoreError;

/// Snapshot in insertion order, optionally narrowed to one status.
pub(crate) async fn list(db: &Database, status: Option<SubmissionStatus>) -> Vec<Submission> {
    db.submissions()
        .await
        .iter()
        .filter(|submission| status.map_or(true, |wanted| submission.status == wanted))
        .cloned()
        .collect()
}

pub(crate) async fn find_by_id(db: &Database, id: &str) -> Result<Submission, StoreError> {
    db.submissions()
        .await
        .iter()
        .find(|submission| submission.id == id)
        .cloned()
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}
