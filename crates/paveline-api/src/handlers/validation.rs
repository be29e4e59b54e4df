use axum::Json;
use paveline_core::models::{FormData, ServiceType};
use paveline_estimate::validation;

use crate::dto::{AreaValidationRequest, PerimeterValidationRequest, ValidationResponse};

pub async fn validate_area(Json(request): Json<AreaValidationRequest>) -> Json<ValidationResponse> {
    let service_type = request.service_type.as_deref().and_then(|s| s.parse::<ServiceType>().ok());
    let outcome = validation::validate_area_measurement(request.area, service_type, &request.unit);
    Json(outcome.into())
}

pub async fn validate_perimeter(
    Json(request): Json<PerimeterValidationRequest>,
) -> Json<ValidationResponse> {
    let outcome =
        validation::validate_perimeter_measurement(request.perimeter, request.area, &request.unit);
    Json(outcome.into())
}

pub async fn validate_form(Json(form): Json<FormData>) -> Json<ValidationResponse> {
    Json(validation::validate_form(&form).into())
}
