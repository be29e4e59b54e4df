//! Paveline Estimate - Validation, pricing and submission
//!
//! This crate implements the estimate use cases on top of the measured
//! boundary: reasonableness checks, tiered pricing, the drawing session that
//! collects widget events, and delivery of the finished request.

pub mod pricing;
pub mod session;
pub mod submission;
pub mod tools;
pub mod validation;

pub use pricing::{calculate_pricing, calculate_pricing_in};
pub use session::{MapEvent, MapSession, SessionUpdate};
pub use submission::{EstimateAdapter, EstimateTransport, HttpTransport, SubmissionOutcome};
pub use tools::{recommend_measurement_tool, MeasurementTool, ToolRecommendation};
pub use validation::{validate_area_measurement, validate_form, validate_perimeter_measurement};
