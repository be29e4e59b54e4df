//! Measure command implementation

use crate::boundary::load_boundary;
use crate::cli::MeasureArgs;
use crate::config_loader::load_config_with_overrides;
use crate::output::OutputWriter;
use crate::output_types::MeasureOutput;
use anyhow::Result;
use paveline_core::config::CliConfigOverrides;
use paveline_core::models::BoundaryMessage;
use paveline_estimate::session::{MapEvent, MapSession, SessionUpdate};
use paveline_estimate::validation::format_number;
use paveline_geo::measure::{bounding_box, calculate_perimeter, vertex_count, vertex_records};
use paveline_geo::simplify::compress_ring;
use paveline_geo::validation::inspect_boundary;
use std::path::Path;
use tabled::Tabled;

pub fn execute(args: MeasureArgs, output: &OutputWriter, config_path: Option<&Path>) -> Result<()> {
    let overrides = CliConfigOverrides {
        area_unit: args.area_unit.clone(),
        length_unit: args.length_unit.clone(),
        ..Default::default()
    };
    let config = load_config_with_overrides(config_path, overrides)?;
    let length_unit = config.length_unit.value.clone();

    let message = load_boundary(&args.path)?;
    let ring = message.geometry.exterior().map(<[_]>::to_vec).unwrap_or_default();
    let (update, session) = run_session(message, &length_unit, &config.area_unit.value);

    let diagnostics = inspect_boundary(&ring);
    let report = MeasureOutput {
        valid: matches!(update, SessionUpdate::BoundaryAccepted(_)),
        vertex_count: vertex_count(&ring),
        perimeter: calculate_perimeter(&ring),
        length_unit,
        measurement: session.measurement(),
        bounding_box: bounding_box(&ring),
        compression: compress_ring(&ring).summary(),
        errors: diagnostics.errors.iter().map(|e| format!("{}: {}", e.location, e.reason)).collect(),
        warnings: diagnostics.warnings.iter().map(|w| format!("{}: {}", w.location, w.reason)).collect(),
        vertices: args.vertices.then(|| vertex_records(&ring)),
    };

    if output.is_json() {
        return output.result(report);
    }

    output.section("Boundary");
    output.kv("Vertices", report.vertex_count);
    output.kv("Perimeter", format!("{} {}", format_number(report.perimeter), report.length_unit));
    if let Some(bbox) = &report.bounding_box {
        output.kv(
            "Extent",
            format!("{} x {} {}", format_number(bbox.width()), format_number(bbox.height()), report.length_unit),
        );
    }
    if let Some(compression) = &report.compression {
        output.kv(
            "Simplified",
            format!(
                "{} -> {} points ({})",
                compression.original_count,
                compression.compressed_count,
                compression.method
            ),
        );
    }

    match (&update, &report.measurement) {
        (SessionUpdate::BoundaryAccepted(_), Some(measurement)) => {
            output.section("Measurement");
            output.kv("Area", format!("{} sq ft", format_number(measurement.area_square_feet)));
            output.kv("Perimeter", format!("{} ft", format_number(measurement.perimeter_feet)));
            output.kv("Reported In", &measurement.original_unit);
            output.success("Boundary is valid");
        }
        (SessionUpdate::BoundaryRejected(reason), _) => output.error(reason),
        _ => output.error("Boundary could not be measured"),
    }

    for error in &report.errors {
        output.error(error);
    }
    for warning in &report.warnings {
        output.warning(warning);
    }

    if let Some(vertices) = report.vertices {
        #[derive(Tabled, serde::Serialize)]
        struct VertexRow {
            #[tabled(rename = "#")]
            index: usize,
            #[tabled(rename = "X")]
            x: f64,
            #[tabled(rename = "Y")]
            y: f64,
            #[tabled(rename = "Z")]
            z: f64,
        }

        let rows: Vec<VertexRow> = vertices
            .into_iter()
            .map(|v| VertexRow { index: v.index, x: v.x, y: v.y, z: v.z })
            .collect();

        output.section("Vertices");
        output.table(rows)?;
    }

    Ok(())
}

/// Feed a boundary through a fresh map session
///
/// A reported area without a unit is read in `area_unit`.
pub(crate) fn run_session(
    mut message: BoundaryMessage,
    length_unit: &str,
    area_unit: &str,
) -> (SessionUpdate, MapSession) {
    if message.area.is_some() && message.unit.is_none() {
        message.unit = Some(area_unit.to_string());
    }

    let mut session = MapSession::new(length_unit);
    let update = session.handle_event(MapEvent::BoundaryComplete(message));
    (update, session)
}
