//! Price command implementation

use super::parse_service_type;
use crate::cli::PriceArgs;
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::PriceOutput;
use anyhow::{bail, Result};
use chrono::Month;
use paveline_core::models::{MeasurementResult, PriceRange};
use paveline_estimate::pricing::{
    calculate_pricing_in, current_month, format_multiplier, season_description, size_description,
};
use paveline_estimate::validation::format_number;
use std::path::Path;
use tabled::Tabled;

pub fn execute(args: PriceArgs, output: &OutputWriter, config_path: Option<&Path>) -> Result<()> {
    if !args.area.is_finite() || args.area <= 0.0 {
        bail!("Area must be greater than 0");
    }

    let config = load_config(config_path)?;
    let service_type = parse_service_type(args.service_type.as_deref())?
        .unwrap_or(config.default_service_type.value);
    let month = match args.month {
        Some(number) => Month::try_from(number)
            .map_err(|_| anyhow::anyhow!("Month must be between 1 and 12, got {}", number))?,
        None => current_month(),
    };

    let pricing = calculate_pricing_in(&MeasurementResult::from_square_feet(args.area), service_type, month);
    let report = PriceOutput {
        size_description: size_description(pricing.square_footage),
        season_description: season_description(month),
        size_adjustment: format_multiplier(pricing.factors.size_multiplier),
        season_adjustment: format_multiplier(pricing.factors.season_multiplier),
        pricing,
    };

    if output.is_json() {
        return output.result(report);
    }

    output.section(format!(
        "{} - {} sq ft",
        report.pricing.service_type.display_name(),
        format_number(report.pricing.square_footage)
    ));
    output.kv("Size", format!("{} ({})", report.size_description, report.size_adjustment));
    output.kv("Season", format!("{} ({})", report.season_description, report.season_adjustment));

    #[derive(Tabled, serde::Serialize)]
    struct PriceRow {
        #[tabled(rename = "Material")]
        material: &'static str,
        #[tabled(rename = "Low")]
        min: String,
        #[tabled(rename = "Average")]
        avg: String,
        #[tabled(rename = "High")]
        max: String,
    }

    let row = |material: &'static str, range: &PriceRange| PriceRow {
        material,
        min: dollars(range.min),
        avg: dollars(range.avg),
        max: dollars(range.max),
    };
    let calculations = &report.pricing.calculations;

    output.table(vec![
        row("Asphalt", &calculations.asphalt),
        row("Concrete", &calculations.concrete),
        row("Maintenance", &calculations.maintenance),
    ])?;

    Ok(())
}

fn dollars(amount: i64) -> String {
    format!("${}", format_number(amount as f64))
}
