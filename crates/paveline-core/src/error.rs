//! Error types for Paveline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PavelineError {
    // Boundary errors
    #[error("Boundary message has no rings")]
    MissingRing,

    // Domain value errors
    #[error("Unknown service type '{value}'. Expected residential, commercial, maintenance, custom, or emergency")]
    UnknownServiceType { value: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Transport errors
    #[error("Estimate submission failed: {reason}")]
    Transport { reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PavelineError {
    fn from(err: serde_json::Error) -> Self {
        PavelineError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PavelineError>;
