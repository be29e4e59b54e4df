//! Paveline Geo - Boundary geometry and unit conversion
//!
//! This crate measures user-drawn boundaries (closure, vertex count,
//! perimeter, planar area), explains why a boundary is rejected, thins dense
//! rings for storage, and normalizes areas and lengths to feet.

pub mod measure;
pub mod models;
pub mod simplify;
pub mod units;
pub mod validation;
