use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Month;
use paveline_core::models::{MeasurementResult, ServiceType};
use paveline_estimate::pricing::{
    calculate_pricing_in, current_month, format_multiplier, season_description, size_description,
};

use crate::dto::{PricingRequest, PricingResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn price_area(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PricingRequest>,
) -> Result<Json<PricingResponse>, ApiError> {
    if !request.area_square_feet.is_finite() || request.area_square_feet <= 0.0 {
        return Err(ApiError::bad_request("areaSquareFeet must be greater than 0"));
    }

    let month = match request.month {
        Some(number) => Month::try_from(number).map_err(|_| {
            ApiError::bad_request("month must be between 1 and 12")
                .with_details(format!("got {}", number))
        })?,
        None => state.pricing_month.unwrap_or_else(current_month),
    };

    let service_type = ServiceType::parse_or_default(&request.service_type);
    let measurement = MeasurementResult::from_square_feet(request.area_square_feet);
    let pricing = calculate_pricing_in(&measurement, service_type, month);

    Ok(Json(PricingResponse {
        size_description: size_description(pricing.square_footage),
        season_description: season_description(month),
        size_adjustment: format_multiplier(pricing.factors.size_multiplier),
        season_adjustment: format_multiplier(pricing.factors.season_multiplier),
        pricing,
    }))
}
