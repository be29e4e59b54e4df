use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PavelineError;

/// Kind of paving work requested
///
/// Selects both the reasonable-area bounds used for validation and the row of
/// the base pricing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    #[default]
    Residential,
    Commercial,
    Maintenance,
    Custom,
    Emergency,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Residential,
        ServiceType::Commercial,
        ServiceType::Maintenance,
        ServiceType::Custom,
        ServiceType::Emergency,
    ];

    /// Wire name (`residential`, `commercial`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Residential => "residential",
            ServiceType::Commercial => "commercial",
            ServiceType::Maintenance => "maintenance",
            ServiceType::Custom => "custom",
            ServiceType::Emergency => "emergency",
        }
    }

    /// Parse a form value, falling back to residential for anything unknown
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Human-readable label shown next to prices
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceType::Residential => "Residential Paving",
            ServiceType::Commercial => "Commercial Paving",
            ServiceType::Maintenance => "Maintenance Services",
            ServiceType::Custom => "Custom Projects",
            ServiceType::Emergency => "Emergency Repairs",
        }
    }

    /// Help text describing typical projects for the service type
    pub fn help_text(&self) -> &'static str {
        match self {
            ServiceType::Residential => {
                "Driveways, walkways, patios, and small parking areas for homes"
            }
            ServiceType::Commercial => "Parking lots, loading docks, and business access areas",
            ServiceType::Maintenance => "Crack sealing, sealcoating, striping, and repair work",
            ServiceType::Custom => "Specialized paving projects requiring unique solutions",
            ServiceType::Emergency => "Urgent repairs for safety hazards or damage",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = PavelineError;

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| PavelineError::UnknownServiceType { value: s.to_string() })
    }
}
