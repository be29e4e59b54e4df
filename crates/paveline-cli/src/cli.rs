use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paveline - Paving estimate toolkit
#[derive(Parser, Debug)]
#[command(name = "paveline")]
#[command(about = "Measure, validate, price and submit paving estimate requests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./paveline.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure a drawn boundary
    Measure(MeasureArgs),

    /// Check an area, a perimeter or a complete form
    Validate(ValidateArgs),

    /// Price an area
    Price(PriceArgs),

    /// Recommend a measurement tool
    Recommend(RecommendArgs),

    /// Validate, price and submit an estimate request
    Submit(SubmitArgs),

    /// Show configuration values and where they came from
    Config,
}

#[derive(Parser, Debug)]
pub struct MeasureArgs {
    /// Boundary file: a boundary-complete message or a GeoJSON Polygon
    pub path: PathBuf,

    /// Unit of the ring coordinates (overrides configuration)
    #[arg(long)]
    pub length_unit: Option<String>,

    /// Unit of the reported area, when the file has one without a unit
    #[arg(long)]
    pub area_unit: Option<String>,

    /// List every vertex
    #[arg(long)]
    pub vertices: bool,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    #[command(subcommand)]
    pub target: ValidateTarget,
}

#[derive(Subcommand, Debug)]
pub enum ValidateTarget {
    /// Check an area against global limits and the service's typical range
    Area {
        /// Area value
        area: f64,

        /// Service type (residential, commercial, maintenance, custom, emergency)
        #[arg(long)]
        service_type: Option<String>,

        /// Area unit
        #[arg(long, default_value = "sqft")]
        unit: String,
    },

    /// Sanity-check a perimeter and the shape it implies
    Perimeter {
        /// Perimeter value
        perimeter: f64,

        /// Area, for the shape check
        #[arg(long)]
        area: Option<f64>,

        /// Length unit
        #[arg(long, default_value = "ft")]
        unit: String,
    },

    /// Validate an estimate form stored as JSON
    Form {
        /// Form file
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
pub struct PriceArgs {
    /// Area in square feet
    #[arg(long)]
    pub area: f64,

    /// Service type (defaults to the configured default service type)
    #[arg(long)]
    pub service_type: Option<String>,

    /// Month to price for, 1-12 (defaults to the current month)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,
}

#[derive(Parser, Debug)]
pub struct RecommendArgs {
    /// Service type
    #[arg(long)]
    pub service_type: Option<String>,

    /// Project description
    #[arg(long, default_value = "")]
    pub description: String,

    /// The site is known to be sloped
    #[arg(long)]
    pub slope: bool,
}

#[derive(Parser, Debug)]
pub struct SubmitArgs {
    /// Form file (JSON, camelCase field names)
    pub form: PathBuf,

    /// Boundary file to measure and attach as the form's area data
    #[arg(long, value_name = "FILE")]
    pub boundary: Option<PathBuf>,

    /// Unit of the boundary coordinates (overrides configuration)
    #[arg(long)]
    pub length_unit: Option<String>,

    /// Estimate backend base URL (overrides configuration)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Show the request that would be sent without sending it
    #[arg(long)]
    pub dry_run: bool,
}
