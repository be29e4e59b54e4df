//! Boundary geometry captured from the map drawing widget.
//!
//! Coordinates arrive as `[x, y]` or `[x, y, z]` arrays inside an Esri-style
//! `rings` structure. Only the first ring is used as the project boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PavelineError, Result};

/// A point captured from the drawing tool
///
/// `z` is the optional elevation. It is carried through to submissions but
/// never used for area or perimeter math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn with_elevation(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = String;

    fn try_from(values: Vec<f64>) -> std::result::Result<Self, Self::Error> {
        match values.as_slice() {
            [x, y] => Ok(Self::new(*x, *y)),
            [x, y, z] => Ok(Self::with_elevation(*x, *y, *z)),
            other => Err(format!("coordinate must have 2 or 3 values, found {}", other.len())),
        }
    }
}

impl From<Coordinate> for Vec<f64> {
    fn from(coord: Coordinate) -> Self {
        match coord.z {
            Some(z) => vec![coord.x, coord.y, z],
            None => vec![coord.x, coord.y],
        }
    }
}

/// Ring geometry as emitted by the drawing widget
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RingGeometry {
    pub rings: Vec<Vec<Coordinate>>,
}

impl RingGeometry {
    /// The exterior ring, if any
    pub fn exterior(&self) -> Option<&[Coordinate]> {
        self.rings.first().map(Vec::as_slice)
    }
}

/// Payload of a boundary-complete (or edit/preview) message
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundaryMessage {
    pub geometry: RingGeometry,

    /// Area reported by the drawing tool, in `unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl BoundaryMessage {
    pub fn from_ring(ring: Vec<Coordinate>) -> Self {
        Self { geometry: RingGeometry { rings: vec![ring] }, ..Default::default() }
    }
}

/// A user-drawn project boundary
///
/// Replaced wholesale on every edit or redraw; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boundary {
    pub ring: Vec<Coordinate>,

    /// Area reported by the drawing tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_raw: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_unit: Option<String>,

    pub timestamp: DateTime<Utc>,
}

impl Boundary {
    /// Create a boundary captured now
    pub fn new(ring: Vec<Coordinate>) -> Self {
        Self { ring, area_raw: None, area_unit: None, timestamp: Utc::now() }
    }

    /// Set the area reported by the drawing tool
    pub fn with_area(mut self, area: f64, unit: impl Into<String>) -> Self {
        self.area_raw = Some(area);
        self.area_unit = Some(unit.into());
        self
    }

    /// Build a boundary from the first ring of a widget message
    pub fn from_message(message: BoundaryMessage) -> Result<Self> {
        let BoundaryMessage { geometry, area, unit } = message;
        let ring = geometry.rings.into_iter().next().ok_or(PavelineError::MissingRing)?;

        Ok(Self { ring, area_raw: area, area_unit: unit, timestamp: Utc::now() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_from_two_and_three_values() {
        let flat: Coordinate = serde_json::from_str("[1.5, -2.0]").unwrap();
        assert_eq!(flat, Coordinate::new(1.5, -2.0));

        let raised: Coordinate = serde_json::from_str("[1.0, 2.0, 30.0]").unwrap();
        assert_eq!(raised.z, Some(30.0));
    }

    #[test]
    fn test_coordinate_rejects_wrong_arity() {
        assert!(serde_json::from_str::<Coordinate>("[1.0]").is_err());
        assert!(serde_json::from_str::<Coordinate>("[1.0, 2.0, 3.0, 4.0]").is_err());
    }

    #[test]
    fn test_coordinate_serializes_as_array() {
        let json = serde_json::to_string(&Coordinate::new(3.0, 4.0)).unwrap();
        assert_eq!(json, "[3.0,4.0]");

        let json = serde_json::to_string(&Coordinate::with_elevation(3.0, 4.0, 5.0)).unwrap();
        assert_eq!(json, "[3.0,4.0,5.0]");
    }

    #[test]
    fn test_boundary_message_uses_first_ring() {
        let message: BoundaryMessage = serde_json::from_str(
            r#"{
                "geometry": { "rings": [
                    [[0, 0], [0, 10], [10, 10], [0, 0]],
                    [[1, 1], [2, 2], [1, 1]]
                ] },
                "area": 50.0,
                "unit": "square-meters"
            }"#,
        )
        .unwrap();

        let boundary = Boundary::from_message(message).unwrap();
        assert_eq!(boundary.ring.len(), 4);
        assert_eq!(boundary.area_raw, Some(50.0));
        assert_eq!(boundary.area_unit.as_deref(), Some("square-meters"));
    }

    #[test]
    fn test_boundary_message_without_rings() {
        let message = BoundaryMessage::default();
        assert!(matches!(Boundary::from_message(message), Err(PavelineError::MissingRing)));
    }
}
