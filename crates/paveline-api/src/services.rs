mod estimate;
mod measurement;

pub use estimate::EstimateService;
pub use measurement::MeasurementService;
