//! Integration tests for output formatting
//!
//! These tests run the `paveline` binary and check that JSON output is valid
//! and carries the expected values.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SQUARE_FEATURE: &str = r#"{
    "type": "Feature",
    "properties": {},
    "geometry": {
        "type": "Polygon",
        "coordinates": [[[0, 0], [0, 100], [100, 100], [100, 0], [0, 0]]]
    }
}"#;

const FORM: &str = r#"{
    "firstName": "Dana",
    "lastName": "Reyes",
    "email": "dana@example.com",
    "phone": "555-123-4567",
    "serviceType": "residential",
    "streetAddress": "12 Elm St",
    "city": "Springfield",
    "state": "IL",
    "zipCode": "62701"
}"#;

/// Run the binary from `dir` with a clean Paveline environment
fn paveline(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_paveline"))
        .current_dir(dir)
        .env_remove("PAVELINE_AREA_UNIT")
        .env_remove("PAVELINE_LENGTH_UNIT")
        .env_remove("PAVELINE_DEFAULT_SERVICE_TYPE")
        .env_remove("PAVELINE_ESTIMATE_ENDPOINT")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn parse_stdout(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

#[test]
fn test_price_json_output() {
    let dir = TempDir::new().unwrap();
    let output = paveline(
        dir.path(),
        &["price", "--area", "1000", "--service-type", "residential", "--month", "4", "--json"],
    );

    assert!(output.status.success(), "Command should succeed");
    let parsed = parse_stdout(&output);
    assert_eq!(parsed["status"], "success");

    let data = &parsed["data"];
    assert_eq!(data["pricing"]["calculations"]["asphalt"]["avg"], 5250);
    assert_eq!(data["size_description"], "Large project");
    assert_eq!(data["season_adjustment"], "Standard");
}

#[test]
fn test_price_human_output() {
    let dir = TempDir::new().unwrap();
    let output = paveline(dir.path(), &["price", "--area", "400", "--month", "6"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Asphalt"));
    assert!(stdout.contains("$1,596"));
}

#[test]
fn test_price_rejects_unknown_service_type() {
    let dir = TempDir::new().unwrap();
    let output = paveline(dir.path(), &["price", "--area", "1000", "--service-type", "driveway"]);

    assert!(!output.status.success(), "Unknown service type should fail");
}

#[test]
fn test_measure_geojson_in_feet() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("square.geojson"), SQUARE_FEATURE).unwrap();

    let output =
        paveline(dir.path(), &["measure", "square.geojson", "--length-unit", "feet", "--json"]);

    assert!(output.status.success(), "Command should succeed");
    let data = &parse_stdout(&output)["data"];
    assert_eq!(data["valid"], true);
    assert_eq!(data["vertex_count"], 4);
    assert_eq!(data["perimeter"], 400.0);
    assert_eq!(data["measurement"]["areaSquareFeet"], 10000.0);
    assert!(data.get("vertices").is_none());
}

#[test]
fn test_validate_area_failure_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let output = paveline(dir.path(), &["validate", "area", "0", "--json"]);

    assert!(!output.status.success(), "Invalid area should fail");
    let data = &parse_stdout(&output)["data"];
    assert_eq!(data["isValid"], false);
    assert_eq!(data["errors"][0], "Area measurement is required and must be greater than 0");
}

#[test]
fn test_recommend_json_output() {
    let dir = TempDir::new().unwrap();
    let output = paveline(dir.path(), &["recommend", "--slope", "--json"]);

    assert!(output.status.success(), "Command should succeed");
    let data = &parse_stdout(&output)["data"];
    assert_eq!(data["recommendation"]["primary"], "arcgis-3d");
    assert_eq!(data["instructions"]["title"], "ArcGIS 3D Measurement Tool");
}

#[test]
fn test_config_reports_sources() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("paveline.toml"), "length_unit = \"feet\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_paveline"))
        .current_dir(dir.path())
        .env("PAVELINE_AREA_UNIT", "acres")
        .env_remove("PAVELINE_LENGTH_UNIT")
        .env_remove("PAVELINE_DEFAULT_SERVICE_TYPE")
        .env_remove("PAVELINE_ESTIMATE_ENDPOINT")
        .args(["config", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let values = &parse_stdout(&output)["data"]["values"];
    assert_eq!(values["area_unit"]["value"], "acres");
    assert_eq!(values["area_unit"]["source"], "Environment");
    assert_eq!(values["length_unit"]["value"], "feet");
    assert_eq!(values["length_unit"]["source"], "File");
    assert_eq!(values["default_service_type"]["source"], "Default");
}

#[test]
fn test_submit_dry_run_attaches_boundary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("form.json"), FORM).unwrap();
    fs::write(dir.path().join("square.geojson"), SQUARE_FEATURE).unwrap();

    let output = paveline(
        dir.path(),
        &[
            "submit",
            "form.json",
            "--boundary",
            "square.geojson",
            "--length-unit",
            "feet",
            "--dry-run",
            "--json",
        ],
    );

    assert!(output.status.success(), "Command should succeed");
    let data = &parse_stdout(&output)["data"];
    assert_eq!(data["dry_run"], true);
    assert_eq!(data["valid"], true);
    assert_eq!(data["endpoint"], "http://localhost:8001/api/estimates");

    let request = &data["request"];
    assert_eq!(request["firstName"], "Dana");
    assert_eq!(request["areaData"]["area"], 10000.0);
    assert_eq!(request["areaData"]["perimeter"], 400.0);
    assert_eq!(request["estimate"]["squareFootage"], 10000.0);
}

#[test]
fn test_submit_dry_run_rejects_invalid_form() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("form.json"), r#"{ "firstName": "Dana" }"#).unwrap();

    let output = paveline(dir.path(), &["submit", "form.json", "--dry-run", "--json"]);

    assert!(!output.status.success(), "Invalid form should fail");
    let data = &parse_stdout(&output)["data"];
    assert_eq!(data["valid"], false);
    assert!(data["request"].get("estimate").is_none());
}
