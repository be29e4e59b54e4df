use paveline_core::error::PavelineError;
use paveline_estimate::session::{MapEvent, MapSession, SessionUpdate};
use paveline_geo::measure::{bounding_box, calculate_perimeter, vertex_count};
use paveline_geo::models::to_geojson;
use paveline_geo::simplify::compress_ring;
use paveline_geo::validation::inspect_boundary;

use crate::dto::{MeasurementRequest, MeasurementResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Service for measuring drawn boundaries
pub struct MeasurementService;

impl MeasurementService {
    pub fn measure(
        state: &AppState,
        request: MeasurementRequest,
    ) -> Result<MeasurementResponse, ApiError> {
        let MeasurementRequest { mut boundary, length_unit } = request;

        let ring = boundary.geometry.exterior().ok_or(PavelineError::MissingRing)?.to_vec();
        if boundary.area.is_some() && boundary.unit.is_none() {
            boundary.unit = Some(state.area_unit().to_string());
        }

        let length_unit = length_unit.unwrap_or_else(|| state.length_unit().to_string());
        let mut session = MapSession::new(length_unit);
        let measurement = match session.handle_event(MapEvent::BoundaryComplete(boundary)) {
            SessionUpdate::BoundaryAccepted(_) => session.measurement(),
            _ => None,
        };

        let diagnostics = inspect_boundary(&ring);
        tracing::debug!(
            valid = diagnostics.is_valid,
            findings = diagnostics.errors.len() + diagnostics.warnings.len(),
            "Measured boundary"
        );

        let compressed = compress_ring(&ring);
        let compression = compressed.summary();

        Ok(MeasurementResponse {
            valid: diagnostics.is_valid,
            vertex_count: vertex_count(&ring),
            perimeter: calculate_perimeter(&ring),
            diagnostics,
            measurement,
            bounding_box: bounding_box(&ring),
            geometry: to_geojson(&compressed.coordinates),
            compression,
        })
    }
}
