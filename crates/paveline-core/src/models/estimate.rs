//! Estimate request payloads exchanged with the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Coordinate, PricingResult};

/// Measured area attached to an estimate request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaData {
    /// Area in square feet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,

    /// Perimeter in feet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perimeter: Option<f64>,

    #[serde(default)]
    pub coordinates: Vec<Coordinate>,
}

/// Fields captured by the estimate request form
///
/// Every field is kept as entered; validation decides what is acceptable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_data: Option<AreaData>,
}

/// Outbound body of `POST /api/estimates`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateSubmission {
    #[serde(flatten)]
    pub form: FormData,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<PricingResult>,

    #[serde(default = "Utc::now")]
    pub submitted_at: DateTime<Utc>,
}

impl EstimateSubmission {
    pub fn new(form: FormData, estimate: Option<PricingResult>) -> Self {
        Self { form, estimate, submitted_at: Utc::now() }
    }
}

/// Backend response to an estimate submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReceipt {
    pub success: bool,

    #[serde(default, alias = "estimateId", skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<PricingResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
