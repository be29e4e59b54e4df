//! Command implementations

mod config;
mod measure;
mod price;
mod recommend;
mod submit;
mod validate;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use paveline_core::models::{ServiceType, ValidationOutcome};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Measure(args) => measure::execute(args, &output, config_path),
        Commands::Validate(args) => validate::execute(args, &output),
        Commands::Price(args) => price::execute(args, &output, config_path),
        Commands::Recommend(args) => recommend::execute(args, &output),
        Commands::Submit(args) => submit::execute(args, &output, config_path).await,
        Commands::Config => config::execute(&output, config_path),
    }
}

/// Read and deserialize a JSON file
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse an optional service type given on the command line
fn parse_service_type(value: Option<&str>) -> Result<Option<ServiceType>> {
    value.map(|v| v.parse::<ServiceType>()).transpose().context(
        "Service type must be one of residential, commercial, maintenance, custom, emergency",
    )
}

/// Print the findings of a validation pass in human mode
fn print_outcome(output: &OutputWriter, outcome: &ValidationOutcome) {
    if output.is_json() {
        return;
    }

    for error in &outcome.errors {
        output.error(error);
    }
    for warning in &outcome.warnings {
        output.warning(warning);
    }
    output.list("Recommendations:", &outcome.recommendations);
}
