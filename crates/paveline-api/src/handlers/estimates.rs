use std::sync::Arc;

use axum::{extract::State, Json};
use paveline_core::models::{EstimateReceipt, EstimateSubmission};

use crate::error::ApiError;
use crate::services::EstimateService;
use crate::state::AppState;

pub async fn submit_estimate(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<EstimateSubmission>,
) -> Result<Json<EstimateReceipt>, ApiError> {
    tracing::info!(
        service_type = %submission.form.service_type,
        has_area = submission.form.area_data.is_some(),
        has_estimate = submission.estimate.is_some(),
        "Processing estimate request"
    );

    let receipt = EstimateService::receive(&state, submission)?;

    Ok(Json(receipt))
}
