pub mod estimate;
pub mod geometry;
pub mod measurement;
pub mod pricing;
pub mod service;

pub use estimate::{AreaData, EstimateReceipt, EstimateSubmission, FormData};
pub use geometry::{Boundary, BoundaryMessage, Coordinate, RingGeometry};
pub use measurement::{MeasurementResult, ValidationOutcome};
pub use pricing::{MaterialPrices, PriceRange, PricingFactors, PricingResult};
pub use service::ServiceType;
