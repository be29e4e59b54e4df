//! Validate command implementation

use super::{parse_service_type, print_outcome, read_json};
use crate::cli::{ValidateArgs, ValidateTarget};
use crate::output::OutputWriter;
use anyhow::{bail, Result};
use paveline_core::models::FormData;
use paveline_estimate::validation::{
    validate_area_measurement, validate_form, validate_perimeter_measurement,
};

pub fn execute(args: ValidateArgs, output: &OutputWriter) -> Result<()> {
    let outcome = match args.target {
        ValidateTarget::Area { area, service_type, unit } => {
            let service_type = parse_service_type(service_type.as_deref())?;
            validate_area_measurement(Some(area), service_type, &unit)
        }
        ValidateTarget::Perimeter { perimeter, area, unit } => {
            validate_perimeter_measurement(Some(perimeter), area, &unit)
        }
        ValidateTarget::Form { path } => {
            let form: FormData = read_json(&path)?;
            validate_form(&form)
        }
    };

    if output.is_json() {
        output.result(&outcome)?;
    } else {
        print_outcome(output, &outcome);
        if outcome.is_valid {
            output.success("Validation passed");
        }
    }

    if !outcome.is_valid {
        bail!("Validation failed with {} error(s)", outcome.errors.len());
    }

    Ok(())
}
