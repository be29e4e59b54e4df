mod estimates;
mod health;
mod measurements;
mod pricing;
mod tools;
mod validation;

pub use estimates::submit_estimate;
pub use health::health_check;
pub use measurements::measure_boundary;
pub use pricing::price_area;
pub use tools::recommend_tool;
pub use validation::{validate_area, validate_form, validate_perimeter};
