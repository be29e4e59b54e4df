//! Recommend command implementation

use super::parse_service_type;
use crate::cli::RecommendArgs;
use crate::output::OutputWriter;
use crate::output_types::RecommendOutput;
use anyhow::Result;
use paveline_estimate::recommend_measurement_tool;
use paveline_estimate::tools::{WHEN_2D_ACCEPTABLE, WHEN_3D_RECOMMENDED};

pub fn execute(args: RecommendArgs, output: &OutputWriter) -> Result<()> {
    let service_type = parse_service_type(args.service_type.as_deref())?;
    let recommendation = recommend_measurement_tool(service_type, &args.description, args.slope);
    let instructions = recommendation.primary.instructions();
    let tooltip = recommendation.primary.tooltip();
    let service_help = service_type.map(|service| service.help_text());

    if output.is_json() {
        return output.result(RecommendOutput {
            recommendation,
            instructions,
            tooltip,
            service_help,
        });
    }

    output.section("Recommended Tool");
    output.kv("Primary", format!("{} ({})", instructions.title, recommendation.primary));
    output.kv("Alternative", recommendation.secondary);
    if let Some(service) = service_type {
        output.kv(service.display_name(), service.help_text());
    }
    output.list("Why:", &recommendation.reasoning);
    if let Some(tip) = tooltip {
        output.info(tip);
    }

    output.section(instructions.title);
    output.info(instructions.description);
    for (step, line) in instructions.instructions.iter().enumerate() {
        println!("  {}. {}", step + 1, line);
    }
    output.list("Benefits:", &to_strings(instructions.benefits));
    output.list("Limitations:", &to_strings(instructions.limitations));

    output.section("Choosing a Tool");
    output.list("3D measurement is recommended for:", &to_strings(&WHEN_3D_RECOMMENDED));
    output.list("2D measurement is fine for:", &to_strings(&WHEN_2D_ACCEPTABLE));

    Ok(())
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
