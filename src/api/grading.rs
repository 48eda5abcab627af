use std::collections::HashMap;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::core::{metrics, state::AppState};
use crate::schemas::submission::{UploadGradeRequest, UploadGradeResponse, UploadGradingResult};
use crate::services::grading::{self, ScoreBand};

/// Stateless grading of an uploaded file. Only the filename and content type
/// choose the rubric; nothing is stored.
pub(crate) async fn grade_upload(
    State(state): State<AppState>,
    payload: Result<Json<UploadGradeRequest>, JsonRejection>,
) -> Result<Json<UploadGradeResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let rubric = state.rubrics().for_upload(payload.filename(), payload.file_type())?;
    let band = ScoreBand::from_settings(state.settings());
    let result = {
        let mut sampler = state.sampler().await;
        grading::simulate(rubric, &HashMap::new(), band, &mut **sampler)
    };

    metrics::record_simulation(rubric.assignment_type, result.percentage);
    tracing::info!(
        filename = payload.filename(),
        assignment_type = rubric.assignment_type,
        percentage = result.percentage,
        "Upload graded"
    );

    Ok(Json(UploadGradeResponse {
        success: true,
        grading_result: UploadGradingResult {
            filename: payload.filename().to_string(),
            assignment_type: rubric.assignment_type.to_string(),
            result,
        },
    }))
}
