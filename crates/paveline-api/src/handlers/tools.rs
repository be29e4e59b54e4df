use axum::Json;
use paveline_core::models::ServiceType;
use paveline_estimate::recommend_measurement_tool;

use crate::dto::{ToolRecommendationRequest, ToolRecommendationResponse};

pub async fn recommend_tool(
    Json(request): Json<ToolRecommendationRequest>,
) -> Json<ToolRecommendationResponse> {
    let service_type = request.service_type.as_deref().and_then(|s| s.parse::<ServiceType>().ok());
    let recommendation =
        recommend_measurement_tool(service_type, &request.description, request.has_slope);
    let instructions = recommendation.primary.instructions();
    let tooltip = recommendation.primary.tooltip();
    let service_help = service_type.map(|service| service.help_text());

    Json(ToolRecommendationResponse { recommendation, instructions, tooltip, service_help })
}
