use std::collections::BTreeMap;

use paveline_core::models::{MeasurementResult, PricingResult, ValidationOutcome};
use paveline_estimate::tools::{ToolInstructions, ToolRecommendation};
use paveline_geo::measure::{BoundingBox, VertexRecord};
use paveline_geo::simplify::CompressionSummary;
use serde::Serialize;

/// Output for measure command
#[derive(Debug, Serialize)]
pub struct MeasureOutput {
    pub valid: bool,
    pub vertex_count: usize,
    /// Perimeter in coordinate units
    pub perimeter: f64,
    pub length_unit: String,
    pub measurement: Option<MeasurementResult>,
    pub bounding_box: Option<BoundingBox>,
    /// How far the ring would be thinned for storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<CompressionSummary>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<VertexRecord>>,
}

/// Output for price command
#[derive(Debug, Serialize)]
pub struct PriceOutput {
    pub pricing: PricingResult,
    pub size_description: &'static str,
    pub season_description: &'static str,
    pub size_adjustment: String,
    pub season_adjustment: String,
}

/// Output for recommend command
#[derive(Debug, Serialize)]
pub struct RecommendOutput {
    pub recommendation: ToolRecommendation,
    pub instructions: ToolInstructions,
    pub tooltip: Option<&'static str>,
    pub service_help: Option<&'static str>,
}

/// Output for submit command
#[derive(Debug, Serialize)]
pub struct SubmitOutput {
    pub submitted: bool,
    pub endpoint: String,
    pub reference_number: Option<String>,
    pub estimate: Option<PricingResult>,
    pub validation: ValidationOutcome,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub values: BTreeMap<String, ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: String,
}
