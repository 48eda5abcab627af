use crate::db::models::Submission;
use crate::db::types::SubmissionStatus;
use crate::db::Database;

use super::types::{GradedUpdate, StoreError};

pub(crate) async fn mark_graded(
    db: &Database,
    id: &str,
    update: GradedUpdate,
) -> Result<Submission, StoreError> {
    let mut submissions = db.submissions().await;
    let submission = find_mut(&mut submissions, id)?;
    ensure_status(submission, SubmissionStatus::PendingGrading, SubmissionStatus::can_grade)?;

    submission.status = SubmissionStatus::Graded;
    submission.questions = update.questions;
    submission.total_score = Some(update.total_score);
    submission.max_total = Some(update.max_total);
    submission.percentage = Some(update.percentage);
    submission.graded_at = Some(update.graded_at);
    submission.graded_by = Some(update.graded_by);

    Ok(submission.clone())
}

pub(crate) async fn mark_released(
    db: &Database,
    id: &str,
    released_at: String,
) -> Result<Submission, StoreError> {
    let mut submissions = db.submissions().await;
    let submission = find_mut(&mut submissions, id)?;
    ensure_status(submission, SubmissionStatus::Graded, SubmissionStatus::can_release)?;

    submission.status = SubmissionStatus::Released;
    submission.released_at = Some(released_at);

    Ok(submission.clone())
}

fn find_mut<'a>(
    submissions: &'a mut [Submission],
    id: &str,
) -> Result<&'a mut Submission, StoreError> {
    submissions
        .iter_mut()
        .find(|submission| submission.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}

fn ensure_status(
    submission: &Submission,
    expected: SubmissionStatus,
    allowed: fn(SubmissionStatus) -> bool,
) -> Result<(), StoreError> {
    if allowed(submission.status) {
        return Ok(());
    }

    Err(StoreError::InvalidState {
        id: submission.id.clone(),
        expected,
        actual: submission.status,
    })
}
