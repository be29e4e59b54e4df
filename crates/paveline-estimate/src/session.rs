//! Drawing widget session
//!
//! [`MapSession`] holds the state one customer builds up while drawing: the
//! accepted boundary, the last area reading, an in-progress preview and any
//! drawing metadata. Widget messages arrive as [`MapEvent`]s, either one at a
//! time through [`MapSession::handle_event`] or over a channel with
//! [`MapSession::drive`].

use chrono::{DateTime, Utc};
use paveline_core::error::{PavelineError, Result};
use paveline_core::models::{
    Boundary, BoundaryMessage, Coordinate, MeasurementResult, RingGeometry,
};
use paveline_geo::measure::{calculate_perimeter, ring_area, validate_boundary, vertex_count};
use paveline_geo::units::{
    convert_area_to_square_feet, normalize_measurement, LengthUnit, SQUARE_METERS_TO_SQUARE_FEET,
};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

pub const INVALID_BOUNDARY_MESSAGE: &str =
    "Invalid boundary: minimum 3 vertices required and polygon must be closed";

/// Area unit assumed when a measurement message does not name one
pub const DEFAULT_MEASUREMENT_UNIT: &str = "square-meters";

/// Area reading reported by the measurement tool
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasurementMessage {
    #[serde(default)]
    pub area: Option<f64>,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub geometry: Option<RingGeometry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasurementErrorMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Typed form of the widget's `{ type, data }` messages
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    MeasurementComplete(MeasurementMessage),
    MeasurementCleared,
    MeasurementError(MeasurementErrorMessage),
    BoundaryComplete(BoundaryMessage),
    BoundaryEditStart,
    BoundaryEditUpdate(BoundaryMessage),
    BoundaryEditComplete(BoundaryMessage),
    BoundaryPreview(BoundaryMessage),
    BoundaryCleared,
    DrawingMetadata(serde_json::Value),
}

impl MapEvent {
    /// Wire name of the event type
    pub fn kind(&self) -> &'static str {
        match self {
            MapEvent::MeasurementComplete(_) => "MEASUREMENT_COMPLETE",
            MapEvent::MeasurementCleared => "MEASUREMENT_CLEARED",
            MapEvent::MeasurementError(_) => "MEASUREMENT_ERROR",
            MapEvent::BoundaryComplete(_) => "BOUNDARY_COMPLETE",
            MapEvent::BoundaryEditStart => "BOUNDARY_EDIT_START",
            MapEvent::BoundaryEditUpdate(_) => "BOUNDARY_EDIT_UPDATE",
            MapEvent::BoundaryEditComplete(_) => "BOUNDARY_EDIT_COMPLETE",
            MapEvent::BoundaryPreview(_) => "BOUNDARY_PREVIEW",
            MapEvent::BoundaryCleared => "BOUNDARY_CLEARED",
            MapEvent::DrawingMetadata(_) => "DRAWING_METADATA",
        }
    }

    /// Parse a raw widget message
    pub fn from_json(raw: &str) -> Result<Self> {
        let envelope: EventEnvelope = serde_json::from_str(raw)?;
        envelope.try_into()
    }
}

#[derive(Debug, Deserialize)]
struct EventEnvelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

impl TryFrom<EventEnvelope> for MapEvent {
    type Error = PavelineError;

    fn try_from(envelope: EventEnvelope) -> Result<Self> {
        let EventEnvelope { kind, data } = envelope;
        let event = match kind.as_str() {
            "MEASUREMENT_COMPLETE" => MapEvent::MeasurementComplete(payload(data)?),
            "MEASUREMENT_CLEARED" => MapEvent::MeasurementCleared,
            "MEASUREMENT_ERROR" => MapEvent::MeasurementError(payload(data)?),
            "BOUNDARY_COMPLETE" => MapEvent::BoundaryComplete(payload(data)?),
            "BOUNDARY_EDIT_START" => MapEvent::BoundaryEditStart,
            "BOUNDARY_EDIT_UPDATE" => MapEvent::BoundaryEditUpdate(payload(data)?),
            "BOUNDARY_EDIT_COMPLETE" => MapEvent::BoundaryEditComplete(payload(data)?),
            "BOUNDARY_PREVIEW" => MapEvent::BoundaryPreview(payload(data)?),
            "BOUNDARY_CLEARED" => MapEvent::BoundaryCleared,
            "DRAWING_METADATA" => MapEvent::DrawingMetadata(data),
            other => {
                return Err(PavelineError::Serialization(format!(
                    "Unknown map event type '{}'",
                    other
                )))
            }
        };
        Ok(event)
    }
}

fn payload<T: serde::de::DeserializeOwned + Default>(data: serde_json::Value) -> Result<T> {
    if data.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(data)?)
}

/// An accepted boundary with its derived attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryRecord {
    pub boundary: Boundary,
    /// Perimeter in the drawing's coordinate units
    pub perimeter: f64,
    pub vertex_count: usize,
}

impl BoundaryRecord {
    fn from_boundary(boundary: Boundary) -> Self {
        let perimeter = calculate_perimeter(&boundary.ring);
        let vertex_count = vertex_count(&boundary.ring);
        Self { boundary, perimeter, vertex_count }
    }
}

/// The last area reading from the measurement tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    pub area_square_feet: f64,
    pub original_area: f64,
    pub original_unit: String,
    pub geometry: Option<RingGeometry>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingMetadata {
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

/// What handling one event changed
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    MeasurementRecorded(MeasurementResult),
    MeasurementCleared,
    /// Status line for a failed measurement
    MeasurementFailed(String),
    BoundaryAccepted(BoundaryRecord),
    /// Status line explaining why the boundary was refused
    BoundaryRejected(String),
    EditStarted,
    Preview { vertex_count: usize, perimeter: f64 },
    BoundaryCleared,
    MetadataRecorded,
}

/// Per-customer drawing state
#[derive(Debug, Clone)]
pub struct MapSession {
    length_unit: String,
    boundary: Option<BoundaryRecord>,
    preview: Option<BoundaryMessage>,
    measurement: Option<MeasurementRecord>,
    metadata: Option<DrawingMetadata>,
    editing: bool,
}

impl Default for MapSession {
    fn default() -> Self {
        Self::new("meters")
    }
}

impl MapSession {
    /// Create an empty session whose drawing coordinates are in `length_unit`
    pub fn new(length_unit: impl Into<String>) -> Self {
        Self {
            length_unit: length_unit.into(),
            boundary: None,
            preview: None,
            measurement: None,
            metadata: None,
            editing: false,
        }
    }

    /// Apply one widget event
    pub fn handle_event(&mut self, event: MapEvent) -> SessionUpdate {
        tracing::debug!(event = event.kind(), "Handling map event");

        match event {
            MapEvent::MeasurementComplete(message) => self.record_measurement(message),
            MapEvent::MeasurementCleared => {
                self.measurement = None;
                SessionUpdate::MeasurementCleared
            }
            MapEvent::MeasurementError(error) => {
                let message = error.message.unwrap_or_else(|| "Measurement failed".to_string());
                tracing::warn!(error = %message, "Measurement tool reported an error");
                SessionUpdate::MeasurementFailed(format!("Error: {}", message))
            }
            MapEvent::BoundaryComplete(message) => self.complete_boundary(message),
            MapEvent::BoundaryEditStart => {
                self.editing = true;
                SessionUpdate::EditStarted
            }
            MapEvent::BoundaryEditUpdate(message) | MapEvent::BoundaryPreview(message) => {
                self.show_preview(message)
            }
            MapEvent::BoundaryEditComplete(message) => {
                self.editing = false;
                self.complete_boundary(message)
            }
            MapEvent::BoundaryCleared => {
                self.boundary = None;
                self.preview = None;
                self.editing = false;
                SessionUpdate::BoundaryCleared
            }
            MapEvent::DrawingMetadata(data) => {
                self.metadata = Some(DrawingMetadata { data, timestamp: Utc::now() });
                SessionUpdate::MetadataRecorded
            }
        }
    }

    /// Apply events until the sender side closes, forwarding every update
    ///
    /// Stops early if nobody is listening for updates anymore.
    pub async fn drive(
        &mut self,
        mut events: mpsc::Receiver<MapEvent>,
        updates: mpsc::Sender<SessionUpdate>,
    ) {
        while let Some(event) = events.recv().await {
            let update = self.handle_event(event);
            if updates.send(update).await.is_err() {
                tracing::debug!("Session update receiver dropped, stopping");
                break;
            }
        }
    }

    /// Normalized measurement for the current state
    ///
    /// A measurement-tool reading wins over the boundary's own area. The
    /// perimeter always comes from the boundary when there is one.
    pub fn measurement(&self) -> Option<MeasurementResult> {
        let perimeter = self.boundary.as_ref().map(|record| record.perimeter).unwrap_or(0.0);

        if let Some(reading) = &self.measurement {
            return Some(normalize_measurement(
                reading.original_area,
                &reading.original_unit,
                perimeter,
                &self.length_unit,
            ));
        }

        let boundary = &self.boundary.as_ref()?.boundary;
        let result = match boundary.area_raw {
            Some(area) => {
                let unit = boundary.area_unit.as_deref().unwrap_or(DEFAULT_MEASUREMENT_UNIT);
                normalize_measurement(area, unit, perimeter, &self.length_unit)
            }
            None => MeasurementResult {
                original_unit: self.length_unit.clone(),
                ..normalize_measurement(
                    self.planar_area_square_feet(&boundary.ring),
                    "square-feet",
                    perimeter,
                    &self.length_unit,
                )
            },
        };

        Some(result)
    }

    pub fn boundary(&self) -> Option<&BoundaryRecord> {
        self.boundary.as_ref()
    }

    pub fn preview(&self) -> Option<&BoundaryMessage> {
        self.preview.as_ref()
    }

    pub fn measurement_record(&self) -> Option<&MeasurementRecord> {
        self.measurement.as_ref()
    }

    pub fn metadata(&self) -> Option<&DrawingMetadata> {
        self.metadata.as_ref()
    }

    pub fn has_boundary(&self) -> bool {
        self.boundary.as_ref().is_some_and(|record| validate_boundary(&record.boundary.ring))
    }

    pub fn has_measurement(&self) -> bool {
        self.measurement.as_ref().is_some_and(|reading| reading.area_square_feet > 0.0)
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Drop everything the customer has drawn
    pub fn clear(&mut self) {
        self.boundary = None;
        self.preview = None;
        self.measurement = None;
        self.metadata = None;
        self.editing = false;
    }

    fn record_measurement(&mut self, message: MeasurementMessage) -> SessionUpdate {
        let area = message.area.unwrap_or(0.0);
        let unit = message.unit.unwrap_or_else(|| DEFAULT_MEASUREMENT_UNIT.to_string());
        let area_square_feet = convert_area_to_square_feet(area, &unit);

        tracing::info!(area_square_feet, unit = %unit, "Measurement recorded");

        self.measurement = Some(MeasurementRecord {
            area_square_feet,
            original_area: area,
            original_unit: unit.clone(),
            geometry: message.geometry,
            timestamp: Utc::now(),
        });

        SessionUpdate::MeasurementRecorded(MeasurementResult {
            area_square_feet,
            perimeter_feet: 0.0,
            original_unit: unit,
        })
    }

    fn complete_boundary(&mut self, message: BoundaryMessage) -> SessionUpdate {
        let boundary = match Boundary::from_message(message) {
            Ok(boundary) if validate_boundary(&boundary.ring) => boundary,
            Ok(boundary) => {
                tracing::warn!(points = boundary.ring.len(), "Rejected invalid boundary");
                return SessionUpdate::BoundaryRejected(INVALID_BOUNDARY_MESSAGE.to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected boundary message");
                return SessionUpdate::BoundaryRejected(INVALID_BOUNDARY_MESSAGE.to_string());
            }
        };

        let record = BoundaryRecord::from_boundary(boundary);
        tracing::info!(
            vertices = record.vertex_count,
            perimeter = record.perimeter,
            "Boundary accepted"
        );

        self.boundary = Some(record.clone());
        SessionUpdate::BoundaryAccepted(record)
    }

    fn show_preview(&mut self, message: BoundaryMessage) -> SessionUpdate {
        let (vertex_count, perimeter) = message
            .geometry
            .exterior()
            .map(|ring| (vertex_count(ring), calculate_perimeter(ring)))
            .unwrap_or((0, 0.0));

        self.preview = Some(message);
        SessionUpdate::Preview { vertex_count, perimeter }
    }

    fn planar_area_square_feet(&self, ring: &[Coordinate]) -> f64 {
        let area = ring_area(ring);
        match LengthUnit::parse(&self.length_unit) {
            Some(LengthUnit::Feet) => area,
            Some(unit) => area / unit.per_meter().powi(2) * SQUARE_METERS_TO_SQUARE_FEET,
            None => area * SQUARE_METERS_TO_SQUARE_FEET,
        }
    }
}
