//! Conversions between boundary rings and the `geo` / `geojson` crates.

use geo::{Coord, LineString, Polygon};
use paveline_core::models::Coordinate;

/// Convert a ring to a `geo::LineString`, dropping elevation
pub fn to_line_string(ring: &[Coordinate]) -> LineString {
    LineString::new(ring.iter().map(|c| Coord { x: c.x, y: c.y }).collect())
}

/// Convert a ring to a single-exterior `geo::Polygon`
///
/// `geo` closes the exterior ring itself if the input is open.
pub fn to_geo_polygon(ring: &[Coordinate]) -> Polygon {
    Polygon::new(to_line_string(ring), vec![])
}

/// Convert a ring to a GeoJSON Polygon geometry
pub fn to_geojson(ring: &[Coordinate]) -> geojson::Geometry {
    let positions: Vec<Vec<f64>> = ring.iter().map(|c| (*c).into()).collect();
    geojson::Geometry::new(geojson::Value::Polygon(vec![positions]))
}

/// Extract the exterior ring of a GeoJSON Polygon (or the first polygon of a MultiPolygon)
pub fn from_geojson(geometry: &geojson::Geometry) -> Option<Vec<Coordinate>> {
    let exterior = match &geometry.value {
        geojson::Value::Polygon(rings) => rings.first()?,
        geojson::Value::MultiPolygon(polygons) => polygons.first()?.first()?,
        _ => return None,
    };

    exterior.iter().map(|position| Coordinate::try_from(position.to_vec()).ok()).collect()
}
