//! Boundary file loading
//!
//! Accepts the drawing widget's boundary-complete payload
//! (`{ "geometry": { "rings": [...] }, "area"?, "unit"? }`) or any GeoJSON
//! object holding a Polygon or MultiPolygon.

use anyhow::{anyhow, Context, Result};
use geojson::GeoJson;
use paveline_core::models::BoundaryMessage;
use paveline_geo::models::from_geojson;
use std::fs;
use std::path::Path;

pub fn load_boundary(path: &Path) -> Result<BoundaryMessage> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read boundary file {}", path.display()))?;
    parse_boundary(&content).with_context(|| format!("Invalid boundary file {}", path.display()))
}

pub fn parse_boundary(content: &str) -> Result<BoundaryMessage> {
    let value: serde_json::Value = serde_json::from_str(content).context("Not valid JSON")?;

    if value.pointer("/geometry/rings").is_some() {
        return serde_json::from_value(value).context("Malformed boundary message");
    }

    let geojson = content.parse::<GeoJson>().context("Neither a boundary message nor GeoJSON")?;
    let geometry = match geojson {
        GeoJson::Geometry(geometry) => Some(geometry),
        GeoJson::Feature(feature) => feature.geometry,
        GeoJson::FeatureCollection(collection) => {
            collection.features.into_iter().find_map(|feature| feature.geometry)
        }
    };

    let ring = geometry
        .as_ref()
        .and_then(from_geojson)
        .ok_or_else(|| anyhow!("GeoJSON does not contain a Polygon"))?;

    Ok(BoundaryMessage::from_ring(ring))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_message() {
        let message = parse_boundary(
            r#"{ "geometry": { "rings": [[[0,0],[0,5],[5,5],[0,0]]] }, "area": 12.5, "unit": "acres" }"#,
        )
        .unwrap();

        assert_eq!(message.geometry.rings[0].len(), 4);
        assert_eq!(message.area, Some(12.5));
        assert_eq!(message.unit.as_deref(), Some("acres"));
    }

    #[test]
    fn test_geojson_feature() {
        let message = parse_boundary(
            r#"{
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Polygon", "coordinates": [[[0,0],[0,5],[5,5],[5,0],[0,0]]] }
            }"#,
        )
        .unwrap();

        assert_eq!(message.geometry.rings.len(), 1);
        assert_eq!(message.geometry.rings[0].len(), 5);
        assert!(message.area.is_none());
    }

    #[test]
    fn test_geojson_point_is_rejected() {
        let result = parse_boundary(r#"{ "type": "Point", "coordinates": [1, 2] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_boundary("not json").is_err());
    }
}
