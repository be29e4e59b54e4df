use geo::algorithm::intersects::Intersects;
use geo::{Coord, Line};
use paveline_core::models::Coordinate;
use serde::{Deserialize, Serialize};

use crate::measure::is_closed_ring;

/// Largest vertex count the drawing widget is expected to produce
pub const MAX_VERTICES: usize = 1000;

/// Boundary inspection result with located findings
///
/// `is_valid` mirrors [`crate::measure::validate_boundary`]. Warnings never affect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

/// Validation finding with location details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new(), warnings: Vec::new() }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        Self { is_valid: false, errors, warnings: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { location, reason });
    }

    pub fn add_warning(&mut self, location: String, reason: String) {
        self.warnings.push(ValidationError { location, reason });
    }

    /// Human readable lines, errors first
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .map(|e| format!("{}: {}", e.location, e.reason))
            .collect()
    }
}

/// Explain whether a ring is usable as a project boundary
pub fn inspect_boundary(ring: &[Coordinate]) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if ring.len() < 4 {
        result.add_error(
            "Boundary".to_string(),
            format!(
                "Boundary needs at least 3 vertices plus a closing point, found {} points",
                ring.len()
            ),
        );
    }

    if !ring.is_empty() && !is_closed_ring(ring) {
        result.add_error(
            "Boundary".to_string(),
            "Boundary must be closed (first point == last point)".to_string(),
        );
    } else if ring.is_empty() {
        result.add_error("Boundary".to_string(), "Boundary has no points".to_string());
    }

    if ring.len() > MAX_VERTICES {
        result.add_warning(
            "Boundary".to_string(),
            format!("Boundary has {} points, more than the {} supported", ring.len(), MAX_VERTICES),
        );
    }

    for (i, pair) in ring.windows(2).enumerate() {
        if pair[0].x == pair[1].x && pair[0].y == pair[1].y {
            result.add_warning(
                format!("Boundary[{}]", i + 1),
                "Duplicate consecutive vertex".to_string(),
            );
        }
    }

    for (i, j) in self_intersections(ring) {
        result.add_warning(
            format!("Boundary edges {} and {}", i, j),
            "Edges cross each other".to_string(),
        );
    }

    result
}

/// Pairs of non-adjacent edges that touch or cross
fn self_intersections(ring: &[Coordinate]) -> Vec<(usize, usize)> {
    let edges: Vec<Line> = ring
        .windows(2)
        .filter(|pair| pair[0].x != pair[1].x || pair[0].y != pair[1].y)
        .map(|pair| {
            Line::new(Coord { x: pair[0].x, y: pair[0].y }, Coord { x: pair[1].x, y: pair[1].y })
        })
        .collect();

    let closed = is_closed_ring(ring);
    let count = edges.len();
    let mut found = Vec::new();

    for i in 0..count {
        for j in (i + 2)..count {
            // First and last edges share the closing vertex
            if closed && i == 0 && j == count - 1 {
                continue;
            }
            if edges[i].intersects(&edges[j]) {
                found.push((i, j));
            }
        }
    }

    found
}
