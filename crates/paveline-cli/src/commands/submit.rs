//! Submit command implementation

use super::measure::run_session;
use super::{print_outcome, read_json};
use crate::boundary::load_boundary;
use crate::cli::SubmitArgs;
use crate::config_loader::load_config_with_overrides;
use crate::output::OutputWriter;
use crate::output_types::SubmitOutput;
use anyhow::{bail, Context, Result};
use paveline_core::config::{parse_endpoint, CliConfigOverrides};
use paveline_core::models::{AreaData, FormData};
use paveline_estimate::session::SessionUpdate;
use paveline_estimate::validation::{format_number, validate_form};
use paveline_estimate::{EstimateAdapter, HttpTransport, SubmissionOutcome};
use std::path::Path;

pub async fn execute(
    args: SubmitArgs,
    output: &OutputWriter,
    config_path: Option<&Path>,
) -> Result<()> {
    let endpoint = args.endpoint.as_deref().map(parse_endpoint).transpose()?;
    let overrides = CliConfigOverrides {
        length_unit: args.length_unit.clone(),
        estimate_endpoint: endpoint,
        ..Default::default()
    };
    let config = load_config_with_overrides(config_path, overrides)?;

    let mut form: FormData = read_json(&args.form)?;

    if let Some(boundary_path) = &args.boundary {
        let message = load_boundary(boundary_path)?;
        let (update, session) =
            run_session(message, &config.length_unit.value, &config.area_unit.value);

        match update {
            SessionUpdate::BoundaryAccepted(record) => {
                let measurement = session
                    .measurement()
                    .context("Accepted boundary produced no measurement")?;
                form.area_data = Some(AreaData {
                    area: Some(measurement.area_square_feet),
                    perimeter: Some(measurement.perimeter_feet),
                    coordinates: record.boundary.ring,
                });
            }
            SessionUpdate::BoundaryRejected(reason) => bail!(reason),
            other => bail!("Unexpected boundary result: {:?}", other),
        }
    }

    let endpoint = config.estimate_endpoint.value.clone();
    let adapter = EstimateAdapter::new(HttpTransport::new(endpoint.clone()));

    if args.dry_run {
        return dry_run(&adapter, form, &endpoint, output);
    }

    tracing::debug!(endpoint = %endpoint, "Submitting estimate request");
    let outcome = adapter
        .submit(form)
        .await
        .with_context(|| format!("Failed to submit estimate request to {}", endpoint))?;

    match outcome {
        SubmissionOutcome::Rejected(validation) => {
            if output.is_json() {
                output.result(SubmitOutput {
                    submitted: false,
                    endpoint,
                    reference_number: None,
                    estimate: None,
                    validation: validation.clone(),
                })?;
            } else {
                print_outcome(output, &validation);
            }
            bail!("Estimate form has {} error(s); nothing was sent", validation.errors.len());
        }
        SubmissionOutcome::Submitted { receipt, validation } => {
            if output.is_json() {
                return output.result(SubmitOutput {
                    submitted: true,
                    endpoint,
                    reference_number: receipt.reference_number,
                    estimate: receipt.estimate,
                    validation,
                });
            }

            print_outcome(output, &validation);
            match &receipt.reference_number {
                Some(reference) => {
                    output.success(format!("Estimate request submitted (reference {})", reference))
                }
                None => output.success("Estimate request submitted"),
            }
            if let Some(message) = &receipt.message {
                output.info(message);
            }
            if let Some(estimate) = &receipt.estimate {
                let asphalt = &estimate.calculations.asphalt;
                output.kv(
                    "Asphalt",
                    format!("${} - ${}", format_number(asphalt.min as f64), format_number(asphalt.max as f64)),
                );
            }
        }
    }

    Ok(())
}

/// Print the payload that would be sent, after validating it
fn dry_run(
    adapter: &EstimateAdapter<HttpTransport>,
    form: FormData,
    endpoint: &str,
    output: &OutputWriter,
) -> Result<()> {
    let validation = validate_form(&form);
    let submission = adapter.prepare(form);

    if output.is_json() {
        output.result(serde_json::json!({
            "dry_run": true,
            "endpoint": adapter.transport().endpoint(),
            "valid": validation.is_valid,
            "validation": validation,
            "request": submission,
        }))?;
    } else {
        output.section("Dry Run");
        output.kv("Endpoint", adapter.transport().endpoint());
        print_outcome(output, &validation);
        output.result(&submission)?;
        output.info(format!("Nothing was sent to {}", endpoint));
    }

    if !validation.is_valid {
        bail!("Estimate form has {} error(s)", validation.errors.len());
    }

    Ok(())
}
