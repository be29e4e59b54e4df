//! Boundary measurement
//!
//! All functions are planar: coordinates are treated as projected x/y values
//! and `z` is ignored. None of them fail or panic on short or empty rings.

use geo::algorithm::area::Area;
use geo::algorithm::bounding_rect::BoundingRect;
use geo::{Distance, Euclidean, Point};
use paveline_core::models::Coordinate;
use serde::{Deserialize, Serialize};

use crate::models::{to_geo_polygon, to_line_string};

/// A vertex with its position in the ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Axis-aligned extent of a ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// True when the ring has at least three distinct vertices and is closed
pub fn validate_boundary(ring: &[Coordinate]) -> bool {
    ring.len() >= 4 && is_closed_ring(ring)
}

/// Exact comparison of the first and last x/y values
pub fn is_closed_ring(ring: &[Coordinate]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => first.x == last.x && first.y == last.y,
        _ => false,
    }
}

/// Number of vertices, excluding the closing point
pub fn vertex_count(ring: &[Coordinate]) -> usize {
    ring.len().saturating_sub(1)
}

/// Planar perimeter, including the closing edge of an open ring
pub fn calculate_perimeter(ring: &[Coordinate]) -> f64 {
    if ring.len() < 2 {
        return 0.0;
    }

    let mut perimeter: f64 = ring.windows(2).map(|pair| edge_length(&pair[0], &pair[1])).sum();

    if !is_closed_ring(ring) {
        if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
            perimeter += edge_length(last, first);
        }
    }

    perimeter
}

/// Unsigned planar area enclosed by the ring
pub fn ring_area(ring: &[Coordinate]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    to_geo_polygon(ring).unsigned_area()
}

/// Indexed vertices with missing elevation reported as 0
pub fn vertex_records(ring: &[Coordinate]) -> Vec<VertexRecord> {
    ring.iter()
        .enumerate()
        .map(|(index, c)| VertexRecord { index, x: c.x, y: c.y, z: c.z.unwrap_or(0.0) })
        .collect()
}

pub fn bounding_box(ring: &[Coordinate]) -> Option<BoundingBox> {
    to_line_string(ring).bounding_rect().map(|rect| BoundingBox {
        min_x: rect.min().x,
        min_y: rect.min().y,
        max_x: rect.max().x,
        max_y: rect.max().y,
    })
}

fn edge_length(a: &Coordinate, b: &Coordinate) -> f64 {
    Euclidean.distance(Point::new(a.x, a.y), Point::new(b.x, b.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f64, f64)]) -> Vec<Coordinate> {
        points.iter().map(|&p| Coordinate::from(p)).collect()
    }

    fn square_100() -> Vec<Coordinate> {
        ring(&[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0), (0.0, 0.0)])
    }

    #[test]
    fn test_square_boundary() {
        let square = square_100();
        assert!(validate_boundary(&square));
        assert_eq!(vertex_count(&square), 4);
        assert_eq!(calculate_perimeter(&square), 400.0);
        assert_eq!(ring_area(&square), 10_000.0);
    }

    #[test]
    fn test_triangle_is_smallest_valid_boundary() {
        let triangle = ring(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0), (0.0, 0.0)]);
        assert!(validate_boundary(&triangle));
        assert_eq!(vertex_count(&triangle), 3);
        assert_eq!(calculate_perimeter(&triangle), 12.0);
        assert_eq!(ring_area(&triangle), 6.0);
    }

    #[test]
    fn test_too_few_points() {
        let short = ring(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert!(!validate_boundary(&short));
        assert!(!validate_boundary(&[]));
    }

    #[test]
    fn test_closure_uses_exact_equality() {
        let nearly = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1e-12)]);
        assert!(!is_closed_ring(&nearly));
        assert!(!validate_boundary(&nearly));
    }

    #[test]
    fn test_closure_ignores_elevation() {
        let mut square = square_100();
        square[0].z = Some(5.0);
        assert!(is_closed_ring(&square));
    }

    #[test]
    fn test_open_ring_perimeter_adds_closing_edge() {
        let open = ring(&[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0)]);
        assert_eq!(calculate_perimeter(&open), 400.0);
    }

    #[test]
    fn test_degenerate_rings() {
        assert_eq!(calculate_perimeter(&[]), 0.0);
        assert_eq!(calculate_perimeter(&ring(&[(5.0, 5.0)])), 0.0);
        assert_eq!(calculate_perimeter(&ring(&[(2.0, 2.0), (2.0, 2.0), (2.0, 2.0)])), 0.0);
        assert_eq!(vertex_count(&[]), 0);
        assert_eq!(ring_area(&ring(&[(0.0, 0.0), (1.0, 1.0)])), 0.0);
    }

    #[test]
    fn test_vertex_records_default_elevation() {
        let mut square = square_100();
        square[1].z = Some(12.5);

        let records = vertex_records(&square);
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].z, 0.0);
        assert_eq!(records[1].z, 12.5);
        assert_eq!(records[2].index, 2);
    }

    #[test]
    fn test_bounding_box() {
        let bbox = bounding_box(&ring(&[(-2.0, 1.0), (4.0, 1.0), (4.0, 7.0), (-2.0, 1.0)])).unwrap();
        assert_eq!(bbox.min_x, -2.0);
        assert_eq!(bbox.max_y, 7.0);
        assert_eq!(bbox.width(), 6.0);
        assert_eq!(bbox.height(), 6.0);
        assert!(bounding_box(&[]).is_none());
    }

    #[test]
    fn test_bounding_box_wire_names() {
        let json = serde_json::to_value(bounding_box(&square_100()).unwrap()).unwrap();
        assert_eq!(json["minX"], 0.0);
        assert_eq!(json["maxY"], 100.0);
    }
}
