use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ServiceType;

/// Whole-currency price band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
    pub avg: i64,
}

/// Price bands for each offered material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MaterialPrices {
    pub asphalt: PriceRange,
    pub concrete: PriceRange,
    pub maintenance: PriceRange,
}

/// Multipliers applied on top of the base table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingFactors {
    pub size_multiplier: f64,
    pub season_multiplier: f64,
}

/// Priced estimate for a measured area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub square_footage: f64,
    pub service_type: ServiceType,
    pub calculations: MaterialPrices,
    pub factors: PricingFactors,
    pub timestamp: DateTime<Utc>,
}
