use paveline_core::models::BoundaryMessage;
use serde::Deserialize;

/// Boundary measurement request: a boundary-complete payload plus unit hints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRequest {
    #[serde(flatten)]
    pub boundary: BoundaryMessage,

    /// Unit of the ring coordinates; the server default applies when absent
    #[serde(default)]
    pub length_unit: Option<String>,
}

/// Pricing request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    pub area_square_feet: f64,

    #[serde(default)]
    pub service_type: String,

    /// Calendar month, 1-12
    #[serde(default)]
    pub month: Option<u8>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaValidationRequest {
    #[serde(default)]
    pub area: Option<f64>,

    #[serde(default)]
    pub service_type: Option<String>,

    #[serde(default = "default_area_unit")]
    pub unit: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerimeterValidationRequest {
    #[serde(default)]
    pub perimeter: Option<f64>,

    #[serde(default)]
    pub area: Option<f64>,

    #[serde(default = "default_length_unit")]
    pub unit: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecommendationRequest {
    #[serde(default)]
    pub service_type: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub has_slope: bool,
}

fn default_area_unit() -> String {
    "sqft".to_string()
}

fn default_length_unit() -> String {
    "ft".to_string()
}
