//! Measurement tool guidance

use std::fmt;

use paveline_core::models::ServiceType;
use serde::{Deserialize, Serialize};

const SLOPE_KEYWORDS: [&str; 7] = ["slope", "hill", "sloped", "steep", "elevation", "grade", "incline"];

/// Tools a customer can measure their project with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementTool {
    /// 2D satellite-imagery drawing tool
    #[serde(rename = "google-maps")]
    GoogleMaps,
    /// Terrain-aware 3D measurement scene
    #[serde(rename = "arcgis-3d")]
    Arcgis3d,
}

impl MeasurementTool {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementTool::GoogleMaps => "google-maps",
            MeasurementTool::Arcgis3d => "arcgis-3d",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "google-maps" => Some(MeasurementTool::GoogleMaps),
            "arcgis-3d" => Some(MeasurementTool::Arcgis3d),
            _ => None,
        }
    }

    /// Form tooltip shown beside the tool, if any
    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            MeasurementTool::Arcgis3d => tooltip("measurement3D"),
            MeasurementTool::GoogleMaps => None,
        }
    }

    /// How to use the tool, and what it is good and bad at
    pub fn instructions(&self) -> ToolInstructions {
        match self {
            MeasurementTool::GoogleMaps => ToolInstructions {
                title: "Google Maps Area Finder",
                description: "Easy-to-use 2D measurement with satellite imagery",
                instructions: &[
                    "Search for your project location using the address search",
                    "Click the drawing tools to select polygon, rectangle, or circle",
                    "Click on the map to start drawing your area",
                    "For polygons: Click to add points, click first point again to close",
                    "For rectangles: Click and drag to create the rectangle",
                    "For circles: Click center point, then drag to set radius",
                    "Use the \"Calculate Area\" button to get measurements",
                ],
                benefits: &[
                    "Simple and intuitive interface",
                    "Real satellite imagery for accurate placement",
                    "Multiple drawing tools (polygon, rectangle, circle)",
                    "Automatic area and perimeter calculation",
                    "Address search for quick location finding",
                ],
                limitations: &[
                    "Limited to 2D measurements only",
                    "Cannot account for elevation changes",
                    "May be less accurate for complex terrain",
                ],
            },
            MeasurementTool::Arcgis3d => ToolInstructions {
                title: "ArcGIS 3D Measurement Tool",
                description: "Advanced 3D measurement with terrain analysis",
                instructions: &[
                    "Wait for the 3D scene to load completely",
                    "Use the navigation controls to position the view",
                    "Click the \"Area Measurement\" tool in the toolbar",
                    "Click on the terrain to start measuring",
                    "Continue clicking to add measurement points",
                    "Double-click to finish the measurement",
                    "View results in the measurement panel",
                ],
                benefits: &[
                    "True 3D measurements with elevation data",
                    "Terrain-aware calculations for slopes and hills",
                    "More accurate for complex topography",
                    "Professional-grade measurement precision",
                    "Automatic calculation of surface area on slopes",
                ],
                limitations: &[
                    "Requires modern browser with WebGL support",
                    "Longer loading time for 3D scene",
                    "May require more computer resources",
                    "Steeper learning curve for new users",
                ],
            },
        }
    }
}

impl fmt::Display for MeasurementTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static usage guide for a measurement tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInstructions {
    pub title: &'static str,
    pub description: &'static str,
    pub instructions: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub limitations: &'static [&'static str],
}

/// Which tool to offer first, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecommendation {
    pub primary: MeasurementTool,
    pub secondary: MeasurementTool,
    pub reasoning: Vec<String>,
}

/// Pick a measurement tool from the service type and project description
///
/// Slope signals promote the 3D tool. Emergency work always goes back to the
/// 2D tool, even on slopes.
pub fn recommend_measurement_tool(
    service_type: Option<ServiceType>,
    description: &str,
    has_slope: bool,
) -> ToolRecommendation {
    let mut recommendation = ToolRecommendation {
        primary: MeasurementTool::GoogleMaps,
        secondary: MeasurementTool::Arcgis3d,
        reasoning: Vec::new(),
    };

    let description = description.to_lowercase();
    let mentions_slope = SLOPE_KEYWORDS.iter().any(|keyword| description.contains(keyword));

    if has_slope || mentions_slope {
        recommendation.primary = MeasurementTool::Arcgis3d;
        recommendation.secondary = MeasurementTool::GoogleMaps;
        recommendation.reasoning.push("3D measurement recommended for sloped terrain".to_string());
    }

    match service_type {
        Some(ServiceType::Commercial) => {
            recommendation
                .reasoning
                .push("Commercial projects benefit from precise 3D measurements".to_string());
            if recommendation.primary == MeasurementTool::GoogleMaps {
                recommendation.reasoning.push("Consider 3D measurement for complex layouts".to_string());
            }
        }
        Some(ServiceType::Emergency) => {
            recommendation.primary = MeasurementTool::GoogleMaps;
            recommendation.secondary = MeasurementTool::Arcgis3d;
            recommendation
                .reasoning
                .push("Quick 2D measurement suitable for emergency repairs".to_string());
        }
        _ => {}
    }

    recommendation
}

/// Situations where each kind of tool is appropriate
pub const WHEN_3D_RECOMMENDED: [&str; 5] = [
    "Properties with significant elevation changes",
    "Sloped driveways or parking areas",
    "Terraced or multi-level projects",
    "Properties near hills or valleys",
    "When precise surface area is critical",
];

pub const WHEN_2D_ACCEPTABLE: [&str; 5] = [
    "Flat or nearly flat surfaces",
    "Simple rectangular areas",
    "Quick estimates for planning",
    "Basic residential driveways",
    "Small maintenance projects",
];

/// Tooltip text for an estimate form element
pub fn tooltip(element: &str) -> Option<&'static str> {
    match element {
        "measurement3D" => Some(
            "Use 3D measurement for slopes and complex terrain to get accurate surface area calculations. This is especially important for driveways on hills or uneven ground.",
        ),
        "areaValidation" => Some(
            "Area measurements help us provide accurate estimates and ensure we bring the right equipment and materials for your project.",
        ),
        "serviceTypeSelection" => Some(
            "Select the service type that best matches your project. This helps us provide appropriate pricing and timeline estimates.",
        ),
        "addressImportant" => Some(
            "Project address helps us factor in local conditions, permit requirements, and travel time for accurate estimates.",
        ),
        "timeline" => Some(
            "Timeline preferences help us schedule your project efficiently and set realistic expectations for completion.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_2d() {
        let rec = recommend_measurement_tool(Some(ServiceType::Residential), "New driveway", false);
        assert_eq!(rec.primary, MeasurementTool::GoogleMaps);
        assert_eq!(rec.secondary, MeasurementTool::Arcgis3d);
        assert!(rec.reasoning.is_empty());
    }

    #[test]
    fn test_slope_keyword_is_case_insensitive() {
        let rec = recommend_measurement_tool(Some(ServiceType::Residential), "Driveway up a HILL", false);
        assert_eq!(rec.primary, MeasurementTool::Arcgis3d);
        assert_eq!(rec.reasoning, vec!["3D measurement recommended for sloped terrain".to_string()]);
    }

    #[test]
    fn test_slope_flag() {
        let rec = recommend_measurement_tool(None, "", true);
        assert_eq!(rec.primary, MeasurementTool::Arcgis3d);
        assert_eq!(rec.secondary, MeasurementTool::GoogleMaps);
    }

    #[test]
    fn test_commercial_on_flat_ground() {
        let rec = recommend_measurement_tool(Some(ServiceType::Commercial), "Parking lot", false);
        assert_eq!(rec.primary, MeasurementTool::GoogleMaps);
        assert_eq!(
            rec.reasoning,
            vec![
                "Commercial projects benefit from precise 3D measurements".to_string(),
                "Consider 3D measurement for complex layouts".to_string(),
            ]
        );
    }

    #[test]
    fn test_emergency_overrides_slope() {
        let rec = recommend_measurement_tool(Some(ServiceType::Emergency), "steep hill", true);
        assert_eq!(rec.primary, MeasurementTool::GoogleMaps);
        assert_eq!(rec.primary.as_str(), "google-maps");
        assert_eq!(rec.reasoning.len(), 2);
        assert_eq!(rec.reasoning[1], "Quick 2D measurement suitable for emergency repairs");
    }

    #[test]
    fn test_tool_wire_names() {
        let json = serde_json::to_string(&MeasurementTool::Arcgis3d).unwrap();
        assert_eq!(json, "\"arcgis-3d\"");
        assert_eq!(MeasurementTool::parse("google-maps"), Some(MeasurementTool::GoogleMaps));
        assert_eq!(MeasurementTool::parse("bing"), None);
    }

    #[test]
    fn test_instructions() {
        let guide = MeasurementTool::Arcgis3d.instructions();
        assert_eq!(guide.title, "ArcGIS 3D Measurement Tool");
        assert_eq!(guide.instructions.len(), 7);
        assert_eq!(guide.limitations.len(), 4);
        assert_eq!(MeasurementTool::GoogleMaps.instructions().limitations.len(), 3);
    }

    #[test]
    fn test_tooltips() {
        assert!(tooltip("timeline").unwrap().starts_with("Timeline preferences"));
        assert!(tooltip("unknown").is_none());
    }

    #[test]
    fn test_only_3d_tool_carries_tooltip() {
        let tip = MeasurementTool::Arcgis3d.tooltip().unwrap();
        assert!(tip.starts_with("Use 3D measurement for slopes"));
        assert_eq!(MeasurementTool::GoogleMaps.tooltip(), None);
    }
}
