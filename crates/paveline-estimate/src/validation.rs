//! Reasonableness checks for measurements and estimate forms
//!
//! Findings are returned as [`ValidationOutcome`] values. Only a missing area,
//! an area outside the global envelope, a missing contact field, or a
//! malformed email are hard errors.

use std::sync::OnceLock;

use paveline_core::models::{FormData, ServiceType, ValidationOutcome};
use paveline_geo::units::{convert_area_to_square_feet, convert_length_to_feet};
use regex::Regex;

use crate::tools::recommend_measurement_tool;

/// Smallest area accepted for any service, in square feet
pub const MIN_AREA_SQFT: f64 = 50.0;

/// Largest area accepted for any service, in square feet
pub const MAX_AREA_SQFT: f64 = 500_000.0;

pub const MIN_PERIMETER_FT: f64 = 28.0;
pub const MAX_PERIMETER_FT: f64 = 10_000.0;

const SLENDER_RATIO: f64 = 8.0;
const COMPACT_RATIO: f64 = 2.0;

const REQUIRED_FIELDS: [&str; 5] = ["firstName", "lastName", "email", "phone", "serviceType"];

/// Typical project size for a service type, in square feet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaRange {
    pub min: f64,
    pub max: f64,
}

/// Area range most projects of this service type fall into
pub fn reasonable_range(service_type: ServiceType) -> AreaRange {
    let (min, max) = match service_type {
        ServiceType::Residential => (100.0, 10_000.0),
        ServiceType::Commercial => (1_000.0, 100_000.0),
        ServiceType::Maintenance => (50.0, 50_000.0),
        ServiceType::Custom => (50.0, 500_000.0),
        ServiceType::Emergency => (50.0, 20_000.0),
    };
    AreaRange { min, max }
}

/// Check a measured area against global limits and the service's typical range
///
/// A missing, zero, negative or NaN area short-circuits with a single error.
/// `service_type` of `None` (an unrecognized form value) skips the typical
/// range check.
pub fn validate_area_measurement(
    area: Option<f64>,
    service_type: Option<ServiceType>,
    unit: &str,
) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::valid();

    let area = match area {
        Some(area) if area > 0.0 => area,
        _ => {
            outcome.error("Area measurement is required and must be greater than 0");
            return outcome;
        }
    };

    let area_sqft = convert_area_to_square_feet(area, unit);

    if area_sqft < MIN_AREA_SQFT {
        outcome.error(format!("Area is below minimum of {} sq ft", format_number(MIN_AREA_SQFT)));
    }

    if area_sqft > MAX_AREA_SQFT {
        outcome.error(format!("Area exceeds maximum of {} sq ft", format_number(MAX_AREA_SQFT)));
    }

    if let Some(service_type) = service_type {
        let range = reasonable_range(service_type);
        let typical = format!(
            "Typical range is {}-{} sq ft",
            format_number(range.min),
            format_number(range.max)
        );

        if area_sqft < range.min {
            outcome.warn(format!("Area seems small for {} projects. {}", service_type, typical));
        }

        if area_sqft > range.max {
            outcome.warn(format!("Area seems large for {} projects. {}", service_type, typical));
            outcome.recommend("Consider breaking large projects into phases");
        }
    }

    if area_sqft > 5_000.0 {
        outcome.recommend("For large areas, consider using 3D measurement tools for better accuracy");
    }

    if area_sqft > 20_000.0 {
        outcome.recommend("Large commercial projects may require site survey for final measurements");
    }

    outcome
}

/// Sanity-check a perimeter and the shape it implies; never produces errors
///
/// The compactness ratio `perimeter / sqrt(area)` is only computed when a
/// positive area is supplied. That area is read as square feet only when `unit`
/// is exactly `ft`; every other unit, `feet` included, reads it as square meters.
pub fn validate_perimeter_measurement(
    perimeter: Option<f64>,
    area: Option<f64>,
    unit: &str,
) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::valid();

    let perimeter = match perimeter {
        Some(perimeter) if perimeter > 0.0 => perimeter,
        _ => {
            outcome.warn("Perimeter measurement not provided - using area-based estimate");
            return outcome;
        }
    };

    let perimeter_ft = convert_length_to_feet(perimeter, unit);

    if perimeter_ft < MIN_PERIMETER_FT {
        outcome.warn(format!("Perimeter seems unusually small ({} ft)", perimeter_ft));
    }

    if perimeter_ft > MAX_PERIMETER_FT {
        outcome.warn(format!("Perimeter seems unusually large ({} ft)", format_number(perimeter_ft)));
    }

    if let Some(area) = area.filter(|a| *a > 0.0) {
        let area_unit = if unit == "ft" { "sqft" } else { "sqm" };
        let ratio = perimeter_ft / convert_area_to_square_feet(area, area_unit).sqrt();

        if ratio > SLENDER_RATIO {
            outcome.warn("Area shape appears very elongated or irregular");
        }

        if ratio < COMPACT_RATIO {
            outcome.warn("Area shape appears very compact - please verify measurements");
        }
    }

    outcome
}

/// Validate a complete estimate form
///
/// Area data on the form is already in square feet and feet.
pub fn validate_form(form: &FormData) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::valid();

    for field in REQUIRED_FIELDS {
        if required_value(form, field).trim().is_empty() {
            outcome.error(format!("{} is required", format_field_name(field)));
        }
    }

    if !form.email.is_empty() && !is_valid_email(&form.email) {
        outcome.error("Please enter a valid email address");
    }

    if !form.phone.is_empty() && !is_valid_phone(&form.phone) {
        outcome.warn("Phone number format could not be verified");
    }

    let service_type = form.service_type.parse::<ServiceType>().ok();

    if let Some(area_data) = &form.area_data {
        outcome.merge(validate_area_measurement(area_data.area, service_type, "sqft"));

        if let Some(perimeter) = area_data.perimeter.filter(|p| *p != 0.0 && !p.is_nan()) {
            outcome.merge(validate_perimeter_measurement(Some(perimeter), area_data.area, "ft"));
        }
    }

    let description = form.project_description.as_deref().unwrap_or_default();
    let tool = recommend_measurement_tool(service_type, description, false);
    outcome.recommendations.extend(tool.reasoning);

    outcome
}

/// Loose `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// At least ten digits forming a plausible international number
pub fn is_valid_phone(phone: &str) -> bool {
    static PHONE: OnceLock<Option<Regex>> = OnceLock::new();
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    digits.len() >= 10
        && PHONE
            .get_or_init(|| Regex::new(r"^\+?[1-9]\d{0,15}$").ok())
            .as_ref()
            .is_some_and(|re| re.is_match(&digits))
}

/// Format a number with thousands separators and at most three decimals
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let text = format!("{}", rounded.abs());
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// `firstName` -> `First Name`
fn format_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len() + 2);
    for (i, c) in field.chars().enumerate() {
        if i == 0 {
            name.extend(c.to_uppercase());
        } else {
            if c.is_ascii_uppercase() {
                name.push(' ');
            }
            name.push(c);
        }
    }
    name
}

fn required_value<'a>(form: &'a FormData, field: &str) -> &'a str {
    match field {
        "firstName" => &form.first_name,
        "lastName" => &form.last_name,
        "email" => &form.email,
        "phone" => &form.phone,
        "serviceType" => &form.service_type,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paveline_core::models::AreaData;

    fn complete_form() -> FormData {
        FormData {
            first_name: "Dana".to_string(),
            last_name: "Reyes".to_string(),
            email: "dana@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            service_type: "residential".to_string(),
            street_address: "12 Elm St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_area_short_circuits() {
        for area in [None, Some(0.0), Some(-10.0), Some(f64::NAN)] {
            let outcome = validate_area_measurement(area, Some(ServiceType::Residential), "sqft");
            assert!(!outcome.is_valid);
            assert_eq!(
                outcome.errors,
                vec!["Area measurement is required and must be greater than 0".to_string()]
            );
            assert!(outcome.warnings.is_empty());
            assert!(outcome.recommendations.is_empty());
        }
    }

    #[test]
    fn test_area_within_range_is_clean() {
        let outcome = validate_area_measurement(Some(1_200.0), Some(ServiceType::Residential), "sqft");
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());
        assert!(outcome.warnings.is_empty());
        assert!(outcome.recommendations.is_empty());
    }

    #[test]
    fn test_area_large_for_residential() {
        let outcome =
            validate_area_measurement(Some(15_000.0), Some(ServiceType::Residential), "sqft");
        assert!(outcome.is_valid);
        assert_eq!(
            outcome.warnings,
            vec!["Area seems large for residential projects. Typical range is 100-10,000 sq ft"
                .to_string()]
        );
        assert_eq!(
            outcome.recommendations,
            vec![
                "Consider breaking large projects into phases".to_string(),
                "For large areas, consider using 3D measurement tools for better accuracy"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_area_below_global_minimum_keeps_collecting() {
        let outcome = validate_area_measurement(Some(40.0), Some(ServiceType::Commercial), "sqft");
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors, vec!["Area is below minimum of 50 sq ft".to_string()]);
        assert_eq!(
            outcome.warnings,
            vec!["Area seems small for commercial projects. Typical range is 1,000-100,000 sq ft"
                .to_string()]
        );
    }

    #[test]
    fn test_area_above_global_maximum() {
        let outcome = validate_area_measurement(Some(600_000.0), Some(ServiceType::Custom), "sqft");
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors, vec!["Area exceeds maximum of 500,000 sq ft".to_string()]);
        assert_eq!(outcome.recommendations.len(), 3);
        assert!(outcome.recommendations[2].contains("site survey"));
    }

    #[test]
    fn test_area_unit_is_converted() {
        // 10 sqm is about 107.6 sq ft
        let outcome = validate_area_measurement(Some(10.0), Some(ServiceType::Residential), "sqm");
        assert!(outcome.is_valid);
        assert!(outcome.warnings.is_empty());

        let outcome = validate_area_measurement(Some(1.0), Some(ServiceType::Custom), "acres");
        assert_eq!(outcome.recommendations.len(), 2);
    }

    #[test]
    fn test_unknown_service_skips_range_check() {
        let outcome = validate_area_measurement(Some(60.0), None, "sqft");
        assert!(outcome.is_valid);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_missing_perimeter_is_warning_only() {
        let outcome = validate_perimeter_measurement(None, Some(100.0), "ft");
        assert!(outcome.is_valid);
        assert_eq!(
            outcome.warnings,
            vec!["Perimeter measurement not provided - using area-based estimate".to_string()]
        );

        let outcome = validate_perimeter_measurement(Some(0.0), None, "ft");
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_perimeter_bounds() {
        let outcome = validate_perimeter_measurement(Some(20.0), None, "ft");
        assert_eq!(outcome.warnings, vec!["Perimeter seems unusually small (20 ft)".to_string()]);

        let outcome = validate_perimeter_measurement(Some(12_500.5), None, "ft");
        assert_eq!(
            outcome.warnings,
            vec!["Perimeter seems unusually large (12,500.5 ft)".to_string()]
        );
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_perimeter_shape_ratio() {
        // 100 x 100 square: 400 / 100 = 4
        let square = validate_perimeter_measurement(Some(400.0), Some(10_000.0), "ft");
        assert!(square.warnings.is_empty());

        // 10 x 1000 strip: 2020 / 100 > 8
        let strip = validate_perimeter_measurement(Some(2_020.0), Some(10_000.0), "ft");
        assert_eq!(strip.warnings, vec!["Area shape appears very elongated or irregular".to_string()]);

        let compact = validate_perimeter_measurement(Some(150.0), Some(10_000.0), "ft");
        assert_eq!(
            compact.warnings,
            vec!["Area shape appears very compact - please verify measurements".to_string()]
        );
    }

    #[test]
    fn test_perimeter_ratio_area_unit_follows_length_unit() {
        // 40 m = 131.2 ft against 100 sqm = 1076 sq ft: ratio 4
        let outcome = validate_perimeter_measurement(Some(40.0), Some(100.0), "meters");
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_perimeter_ratio_reads_feet_spelling_area_as_square_meters() {
        // 400 ft against 10,000 sqm = 107,639 sq ft: ratio 1.2
        let outcome = validate_perimeter_measurement(Some(400.0), Some(10_000.0), "feet");
        assert_eq!(
            outcome.warnings,
            vec!["Area shape appears very compact - please verify measurements".to_string()]
        );
    }

    #[test]
    fn test_complete_form_is_valid() {
        let outcome = validate_form(&complete_form());
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_required_fields() {
        let form = FormData { email: String::new(), ..Default::default() };
        let outcome = validate_form(&form);
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.errors,
            vec![
                "First Name is required".to_string(),
                "Last Name is required".to_string(),
                "Email is required".to_string(),
                "Phone is required".to_string(),
                "Service Type is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let form = FormData { last_name: "   ".to_string(), ..complete_form() };
        let outcome = validate_form(&form);
        assert_eq!(outcome.errors, vec!["Last Name is required".to_string()]);
    }

    #[test]
    fn test_email_is_hard_error_phone_is_warning() {
        let form = FormData {
            email: "dana@example".to_string(),
            phone: "555-1234".to_string(),
            ..complete_form()
        };
        let outcome = validate_form(&form);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors, vec!["Please enter a valid email address".to_string()]);
        assert_eq!(outcome.warnings, vec!["Phone number format could not be verified".to_string()]);
    }

    #[test]
    fn test_form_merges_area_and_perimeter() {
        let form = FormData {
            area_data: Some(AreaData {
                area: Some(15_000.0),
                perimeter: Some(20.0),
                coordinates: Vec::new(),
            }),
            ..complete_form()
        };
        let outcome = validate_form(&form);
        assert!(outcome.is_valid);
        assert!(outcome.warnings.iter().any(|w| w.starts_with("Area seems large")));
        assert!(outcome.warnings.iter().any(|w| w.starts_with("Perimeter seems unusually small")));
        assert!(outcome.warnings.iter().any(|w| w.contains("very compact")));
    }

    #[test]
    fn test_form_with_empty_area_data_is_invalid() {
        let form = FormData { area_data: Some(AreaData::default()), ..complete_form() };
        let outcome = validate_form(&form);
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.errors,
            vec!["Area measurement is required and must be greater than 0".to_string()]
        );
    }

    #[test]
    fn test_form_appends_tool_reasoning() {
        let form = FormData {
            service_type: "commercial".to_string(),
            project_description: Some("Parking lot on a steep grade".to_string()),
            ..complete_form()
        };
        let outcome = validate_form(&form);
        assert_eq!(
            outcome.recommendations,
            vec![
                "3D measurement recommended for sloped terrain".to_string(),
                "Commercial projects benefit from precise 3D measurements".to_string(),
            ]
        );
    }

    #[test]
    fn test_phone_formats() {
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(!is_valid_phone("555-1234"));
        assert!(!is_valid_phone("055-123-4567"));
        assert!(!is_valid_phone("12345678901234567"));
    }

    #[test]
    fn test_email_formats() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(10_000.0), "10,000");
        assert_eq!(format_number(500_000.0), "500,000");
        assert_eq!(format_number(1_234_567.891_23), "1,234,567.891");
        assert_eq!(format_number(-1_500.0), "-1,500");
    }

    #[test]
    fn test_format_field_name() {
        assert_eq!(format_field_name("firstName"), "First Name");
        assert_eq!(format_field_name("serviceType"), "Service Type");
        assert_eq!(format_field_name("email"), "Email");
    }
}
