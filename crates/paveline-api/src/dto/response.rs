use paveline_core::models::{MeasurementResult, PricingResult, ValidationOutcome};
use paveline_estimate::tools::{ToolInstructions, ToolRecommendation};
use paveline_geo::measure::BoundingBox;
use paveline_geo::simplify::CompressionSummary;
use paveline_geo::validation::ValidationResult;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "paveline-api", version: env!("CARGO_PKG_VERSION") }
    }
}

/// Boundary measurement response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementResponse {
    pub valid: bool,
    pub vertex_count: usize,
    /// Perimeter in coordinate units
    pub perimeter: f64,
    pub diagnostics: ValidationResult,

    /// Normalized measurement, present only for accepted boundaries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement: Option<MeasurementResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,

    /// Boundary polygon, thinned when the ring is dense
    pub geometry: geojson::Geometry,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<CompressionSummary>,
}

/// Priced estimate plus the display labels for its multipliers
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    #[serde(flatten)]
    pub pricing: PricingResult,
    pub size_description: &'static str,
    pub season_description: &'static str,
    pub size_adjustment: String,
    pub season_adjustment: String,
}

/// Validation outcome with its one-block summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
    pub message: String,
}

impl From<ValidationOutcome> for ValidationResponse {
    fn from(outcome: ValidationOutcome) -> Self {
        let message = outcome.message();
        Self { outcome, message }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecommendationResponse {
    #[serde(flatten)]
    pub recommendation: ToolRecommendation,
    /// How to use the primary tool
    pub instructions: ToolInstructions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<&'static str>,
    /// Typical projects for the requested service type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_help: Option<&'static str>,
}
