//! Paveline Core - Domain models, errors, and configuration
//!
//! This crate contains the shared domain types for the estimate pipeline:
//! boundaries drawn on the map, normalized measurements, validation outcomes,
//! pricing results and the estimate submission payload.

pub mod config;
pub mod error;
pub mod models;

pub use error::{PavelineError, Result};
