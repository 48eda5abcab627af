use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::core::{metrics, state::AppState, time};
use crate::db::models::Submission;
use crate::repositories;
use crate::repositories::submissions::GradedUpdate;
use crate::schemas::submission::{GradeSubmissionResponse, ListSubmissionsQuery, ReleaseResponse};
use crate::services::grading::{self, ScoreBand};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/submissions", get(list_submissions))
        .route("/submissions/:submission_id", get(get_submission))
        .route("/submissions/:submission_id/grade", post(grade_submission))
        .route("/submissions/:submission_id/release", post(release_submission))
}

async fn list_submissions(
    State(state): State<AppState>,
    query: Result<Query<ListSubmissionsQuery>, QueryRejection>,
) -> Result<Json<Vec<Submission>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(Json(repositories::submissions::list(state.db(), query.status).await))
}

async fn get_submission(
    Path(submission_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Submission>, ApiError> {
    let submission = repositories::submissions::find_by_id(state.db(), &submission_id).await?;
    Ok(Json(submission))
}

async fn grade_submission(
    Path(submission_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GradeSubmissionResponse>, ApiError> {
    let submission = repositories::submissions::find_by_id(state.db(), &submission_id).await?;
    if !submission.status.can_grade() {
        return Err(ApiError::InvalidState("Submission already graded".to_string()));
    }

    let rubric = state.rubrics().get(&submission.assignment_type)?;
    let band = ScoreBand::from_settings(state.settings());
    let result = {
        let answers = submission.answers();
        let mut sampler = state.sampler().await;
        grading::simulate(rubric, &answers, band, &mut **sampler)
    };

    // The store re-checks the status under its lock, so a concurrent grade
    // of the same submission fails here instead of overwriting.
    let graded = repositories::submissions::mark_graded(
        state.db(),
        &submission_id,
        GradedUpdate {
            questions: result.submission_questions(),
            total_score: result.total_score,
            max_total: result.max_total,
            percentage: result.percentage,
            graded_at: time::format_utc(time::now_utc()),
            graded_by: state.settings().grading().grader_id.clone(),
        },
    )
    .await?;

    metrics::record_transition("graded");
    metrics::record_simulation(rubric.assignment_type, result.percentage);
    tracing::info!(
        submission_id = %graded.id,
        total_score = result.total_score,
        max_total = result.max_total,
        percentage = result.percentage,
        "Submission graded"
    );

    Ok(Json(GradeSubmissionResponse {
        submission_id: graded.id,
        student_name: graded.student_name,
        filename: graded.filename,
        assignment_type: graded.assignment_type,
        result,
    }))
}

async fn release_submission(
    Path(submission_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ReleaseResponse>, ApiError> {
    let released = repositories::submissions::mark_released(
        state.db(),
        &submission_id,
        time::format_utc(time::now_utc()),
    )
    .await?;

    metrics::record_transition("released");
    tracing::info!(submission_id = %released.id, "Grades released");

    Ok(Json(ReleaseResponse { message: "Grades released successfully" }))
}
