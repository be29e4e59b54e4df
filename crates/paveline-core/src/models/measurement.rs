use serde::{Deserialize, Serialize};

/// Normalized measurement derived from a boundary or a widget area reading
///
/// Recomputed on every boundary change, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementResult {
    pub area_square_feet: f64,
    pub perimeter_feet: f64,
    /// Unit the area was originally reported in
    pub original_unit: String,
}

impl MeasurementResult {
    /// A measurement already expressed in square feet with no perimeter
    pub fn from_square_feet(area_square_feet: f64) -> Self {
        Self { area_square_feet, perimeter_feet: 0.0, original_unit: "square-feet".to_string() }
    }
}

/// Findings of a validation pass
///
/// Hard errors make the outcome invalid. Warnings and recommendations are
/// informational and never block a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::valid()
    }
}

impl ValidationOutcome {
    /// Create a valid outcome with no findings
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new(), warnings: Vec::new(), recommendations: Vec::new() }
    }

    /// Record a hard error
    pub fn error(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn recommend(&mut self, message: impl Into<String>) {
        self.recommendations.push(message.into());
    }

    /// Fold another outcome into this one
    pub fn merge(&mut self, other: ValidationOutcome) {
        self.is_valid = self.is_valid && other.is_valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.recommendations.extend(other.recommendations);
    }

    /// One-block summary for display
    pub fn message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("Errors: {}\n", self.errors.join(", ")));
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("Warnings: {}\n", self.warnings.join(", ")));
        }

        if !self.recommendations.is_empty() {
            message.push_str(&format!("Recommendations: {}", self.recommendations.join(", ")));
        }

        message.trim().to_string()
    }
}
