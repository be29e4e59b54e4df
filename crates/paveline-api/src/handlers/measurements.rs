use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{MeasurementRequest, MeasurementResponse};
use crate::error::ApiError;
use crate::services::MeasurementService;
use crate::state::AppState;

pub async fn measure_boundary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MeasurementRequest>,
) -> Result<Json<MeasurementResponse>, ApiError> {
    let response = MeasurementService::measure(&state, request)?;
    Ok(Json(response))
}
