//! Area and length unit conversion
//!
//! Unit strings are matched exactly and case-sensitively. Unknown units never
//! fail: each function falls back to its own default multiplier, and the
//! fallbacks intentionally differ between call sites.

use paveline_core::models::MeasurementResult;

pub const SQUARE_METERS_TO_SQUARE_FEET: f64 = 10.7639;
pub const ACRES_TO_SQUARE_FEET: f64 = 43560.0;
pub const METERS_TO_FEET: f64 = 3.28084;
pub const METERS_TO_YARDS: f64 = 1.09361;
pub const METERS_TO_MILES: f64 = 0.000621371;

/// Units the drawing widget reports areas in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaUnit {
    SquareMeters,
    SquareFeet,
    Acres,
}

impl AreaUnit {
    /// Exact match on the accepted spellings
    pub fn parse(unit: &str) -> Option<Self> {
        match unit {
            "square-meters" | "sqm" | "m²" => Some(AreaUnit::SquareMeters),
            "square-feet" | "sqft" | "ft²" => Some(AreaUnit::SquareFeet),
            "acres" => Some(AreaUnit::Acres),
            _ => None,
        }
    }

    /// Square feet per one unit
    pub fn square_feet_factor(&self) -> f64 {
        match self {
            AreaUnit::SquareMeters => SQUARE_METERS_TO_SQUARE_FEET,
            AreaUnit::SquareFeet => 1.0,
            AreaUnit::Acres => ACRES_TO_SQUARE_FEET,
        }
    }
}

/// Units perimeters and coordinate distances are reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meters,
    Feet,
    Yards,
    Miles,
}

impl LengthUnit {
    /// Exact match on the accepted spellings
    pub fn parse(unit: &str) -> Option<Self> {
        match unit {
            "meters" | "m" => Some(LengthUnit::Meters),
            "feet" | "ft" => Some(LengthUnit::Feet),
            "yards" => Some(LengthUnit::Yards),
            "miles" => Some(LengthUnit::Miles),
            _ => None,
        }
    }

    /// Multiplier applied by [`convert_length_to_feet`]
    ///
    /// Yards and miles reuse the per-meter factors, matching the published
    /// conversion table rather than physical feet.
    pub fn feet_table_factor(&self) -> f64 {
        match self {
            LengthUnit::Meters => METERS_TO_FEET,
            LengthUnit::Feet => 1.0,
            LengthUnit::Yards => METERS_TO_YARDS,
            LengthUnit::Miles => METERS_TO_MILES,
        }
    }

    /// Units per meter
    pub fn per_meter(&self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Feet => METERS_TO_FEET,
            LengthUnit::Yards => METERS_TO_YARDS,
            LengthUnit::Miles => METERS_TO_MILES,
        }
    }
}

/// Convert an area to square feet; unknown units are treated as square meters
pub fn convert_area_to_square_feet(value: f64, unit: &str) -> f64 {
    let multiplier = AreaUnit::parse(unit)
        .map(|u| u.square_feet_factor())
        .unwrap_or(SQUARE_METERS_TO_SQUARE_FEET);
    value * multiplier
}

/// Convert a length to feet; unknown units pass through 1:1
pub fn convert_length_to_feet(value: f64, unit: &str) -> f64 {
    let multiplier = LengthUnit::parse(unit).map(|u| u.feet_table_factor()).unwrap_or(1.0);
    value * multiplier
}

/// Convert a boundary perimeter to feet; unknown units are treated as meters
pub fn perimeter_to_feet(value: f64, unit: &str) -> f64 {
    let multiplier = match unit {
        "feet" | "ft" => 1.0,
        _ => METERS_TO_FEET,
    };
    value * multiplier
}

/// Convert a perimeter between two length units; unknown units count as 1 per meter
pub fn convert_perimeter(value: f64, from: &str, to: &str) -> f64 {
    let from_multiplier = LengthUnit::parse(from).map(|u| u.per_meter()).unwrap_or(1.0);
    let to_multiplier = LengthUnit::parse(to).map(|u| u.per_meter()).unwrap_or(1.0);
    (value / from_multiplier) * to_multiplier
}

/// Convert a perimeter drawn in `unit` to feet
///
/// Known units go through their per-meter factor, the same way planar areas
/// do. Unknown units fall back to [`perimeter_to_feet`] and count as meters.
pub fn drawn_perimeter_to_feet(value: f64, unit: &str) -> f64 {
    match LengthUnit::parse(unit) {
        Some(LengthUnit::Feet) => value,
        Some(_) => convert_perimeter(value, unit, "feet"),
        None => perimeter_to_feet(value, unit),
    }
}

/// Build the normalized measurement from raw widget readings
pub fn normalize_measurement(
    area: f64,
    area_unit: &str,
    perimeter: f64,
    length_unit: &str,
) -> MeasurementResult {
    MeasurementResult {
        area_square_feet: convert_area_to_square_feet(area, area_unit),
        perimeter_feet: drawn_perimeter_to_feet(perimeter, length_unit),
        original_unit: area_unit.to_string(),
    }
}
