//! Tiered price bands for a measured area
//!
//! Prices are computed in two rounded passes: the base table times the
//! square footage, then the size and season multipliers. Both passes round
//! halves toward positive infinity so results match the published price
//! sheets to the dollar.

use chrono::{Datelike, Local, Month, Utc};
use paveline_core::models::{
    MaterialPrices, MeasurementResult, PriceRange, PricingFactors, PricingResult, ServiceType,
};
use serde::{Deserialize, Serialize};

/// Per-square-foot rates for one material, in USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBand {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl RateBand {
    const fn new(min: f64, max: f64, avg: f64) -> Self {
        Self { min, max, avg }
    }

    fn times(&self, square_feet: f64) -> PriceRange {
        PriceRange {
            min: js_round(square_feet * self.min),
            max: js_round(square_feet * self.max),
            avg: js_round(square_feet * self.avg),
        }
    }
}

/// Base rates for every material of one service type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialRates {
    pub asphalt: RateBand,
    pub concrete: RateBand,
    pub maintenance: RateBand,
}

pub fn base_rates(service_type: ServiceType) -> MaterialRates {
    match service_type {
        ServiceType::Residential => MaterialRates {
            asphalt: RateBand::new(3.50, 7.00, 5.25),
            concrete: RateBand::new(6.00, 12.00, 9.00),
            maintenance: RateBand::new(1.50, 3.00, 2.25),
        },
        ServiceType::Commercial => MaterialRates {
            asphalt: RateBand::new(4.00, 8.50, 6.25),
            concrete: RateBand::new(7.00, 15.00, 11.00),
            maintenance: RateBand::new(2.00, 4.00, 3.00),
        },
        ServiceType::Maintenance => MaterialRates {
            asphalt: RateBand::new(1.50, 3.50, 2.50),
            concrete: RateBand::new(2.00, 4.50, 3.25),
            maintenance: RateBand::new(1.00, 2.50, 1.75),
        },
        ServiceType::Custom => MaterialRates {
            asphalt: RateBand::new(4.50, 9.00, 6.75),
            concrete: RateBand::new(8.00, 16.00, 12.00),
            maintenance: RateBand::new(2.50, 5.00, 3.75),
        },
        ServiceType::Emergency => MaterialRates {
            asphalt: RateBand::new(5.00, 10.00, 7.50),
            concrete: RateBand::new(9.00, 18.00, 13.50),
            maintenance: RateBand::new(3.00, 6.00, 4.50),
        },
    }
}

/// Smaller jobs cost more per square foot
pub fn size_multiplier(square_feet: f64) -> f64 {
    if square_feet < 500.0 {
        1.2
    } else if square_feet < 1000.0 {
        1.1
    } else if square_feet < 2000.0 {
        1.0
    } else if square_feet < 5000.0 {
        0.95
    } else {
        0.9
    }
}

/// Seasonal rate adjustment
///
/// November falls outside both listed ranges and gets the summer rate.
pub fn season_multiplier(month: Month) -> f64 {
    match month {
        Month::December | Month::January | Month::February => 1.15,
        Month::March | Month::April | Month::May | Month::September | Month::October => 1.0,
        _ => 0.95,
    }
}

/// Price a measurement using the current local month
pub fn calculate_pricing(measurement: &MeasurementResult, service_type: ServiceType) -> PricingResult {
    calculate_pricing_in(measurement, service_type, current_month())
}

/// Price a measurement for a fixed month
pub fn calculate_pricing_in(
    measurement: &MeasurementResult,
    service_type: ServiceType,
    month: Month,
) -> PricingResult {
    let square_feet = measurement.area_square_feet;
    let rates = base_rates(service_type);

    let size = size_multiplier(square_feet);
    let season = season_multiplier(month);
    let adjust = |range: PriceRange| PriceRange {
        min: js_round(range.min as f64 * size * season),
        max: js_round(range.max as f64 * size * season),
        avg: js_round(range.avg as f64 * size * season),
    };

    PricingResult {
        square_footage: square_feet,
        service_type,
        calculations: MaterialPrices {
            asphalt: adjust(rates.asphalt.times(square_feet)),
            concrete: adjust(rates.concrete.times(square_feet)),
            maintenance: adjust(rates.maintenance.times(square_feet)),
        },
        factors: PricingFactors { size_multiplier: size, season_multiplier: season },
        timestamp: Utc::now(),
    }
}

pub fn current_month() -> Month {
    Month::try_from(Local::now().month() as u8).unwrap_or(Month::January)
}

pub fn size_description(square_feet: f64) -> &'static str {
    if square_feet < 500.0 {
        "Small project"
    } else if square_feet < 1000.0 {
        "Medium project"
    } else if square_feet < 2000.0 {
        "Large project"
    } else if square_feet < 5000.0 {
        "Very large project"
    } else {
        "Commercial scale"
    }
}

pub fn season_description(month: Month) -> &'static str {
    match month {
        Month::December | Month::January | Month::February => "Winter rates",
        Month::March | Month::April | Month::May | Month::September | Month::October => {
            "Peak season"
        }
        _ => "Summer rates",
    }
}

/// `1.15` -> `+15%`, `0.95` -> `-5%`, `1.0` -> `Standard`
pub fn format_multiplier(multiplier: f64) -> String {
    let percentage = js_round((multiplier - 1.0) * 100.0);
    if percentage > 0 {
        format!("+{}%", percentage)
    } else if percentage < 0 {
        format!("{}%", percentage)
    } else {
        "Standard".to_string()
    }
}

/// Round to the nearest integer with halves going toward positive infinity
fn js_round(value: f64) -> i64 {
    let rounded = value.round();
    let rounded = if value - rounded == 0.5 { rounded + 1.0 } else { rounded };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(square_feet: f64, service_type: ServiceType, month: Month) -> PricingResult {
        calculate_pricing_in(&MeasurementResult::from_square_feet(square_feet), service_type, month)
    }

    #[test]
    fn test_residential_1000_sqft_in_peak_season() {
        let result = priced(1000.0, ServiceType::Residential, Month::April);

        assert_eq!(result.factors.size_multiplier, 1.0);
        assert_eq!(result.factors.season_multiplier, 1.0);
        assert_eq!(result.calculations.asphalt, PriceRange { min: 3500, max: 7000, avg: 5250 });
        assert_eq!(result.calculations.concrete, PriceRange { min: 6000, max: 12000, avg: 9000 });
        assert_eq!(result.calculations.maintenance, PriceRange { min: 1500, max: 3000, avg: 2250 });
        assert_eq!(result.square_footage, 1000.0);
        assert_eq!(result.service_type, ServiceType::Residential);
    }

    #[test]
    fn test_small_summer_job_applies_both_multipliers() {
        let result = priced(400.0, ServiceType::Residential, Month::June);

        assert_eq!(result.factors.size_multiplier, 1.2);
        assert_eq!(result.factors.season_multiplier, 0.95);
        // 400 * 3.50 = 1400 -> * 1.2 * 0.95 = 1596
        assert_eq!(result.calculations.asphalt, PriceRange { min: 1596, max: 3192, avg: 2394 });
    }

    #[test]
    fn test_base_amount_is_rounded_before_multipliers() {
        // 101 * 2.25 = 227.25 rounds to 227 before 1.2 is applied
        let result = priced(101.0, ServiceType::Residential, Month::April);
        assert_eq!(result.calculations.maintenance.avg, js_round(227.0 * 1.2));
        assert_eq!(result.calculations.maintenance.avg, 272);
    }

    #[test]
    fn test_size_multiplier_boundaries() {
        assert_eq!(size_multiplier(499.99), 1.2);
        assert_eq!(size_multiplier(500.0), 1.1);
        assert_eq!(size_multiplier(999.0), 1.1);
        assert_eq!(size_multiplier(1000.0), 1.0);
        assert_eq!(size_multiplier(2000.0), 0.95);
        assert_eq!(size_multiplier(4999.0), 0.95);
        assert_eq!(size_multiplier(5000.0), 0.9);
    }

    #[test]
    fn test_season_multiplier_by_month() {
        assert_eq!(season_multiplier(Month::December), 1.15);
        assert_eq!(season_multiplier(Month::January), 1.15);
        assert_eq!(season_multiplier(Month::February), 1.15);
        assert_eq!(season_multiplier(Month::March), 1.0);
        assert_eq!(season_multiplier(Month::May), 1.0);
        assert_eq!(season_multiplier(Month::September), 1.0);
        assert_eq!(season_multiplier(Month::October), 1.0);
        assert_eq!(season_multiplier(Month::June), 0.95);
        assert_eq!(season_multiplier(Month::August), 0.95);
        assert_eq!(season_multiplier(Month::November), 0.95);
    }

    #[test]
    fn test_every_service_has_rates() {
        for service in ServiceType::ALL {
            let rates = base_rates(service);
            assert!(rates.asphalt.min < rates.asphalt.avg && rates.asphalt.avg < rates.asphalt.max);
            assert!(rates.concrete.min < rates.concrete.max);
        }
        assert_eq!(base_rates(ServiceType::Emergency).concrete.avg, 13.50);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(size_description(300.0), "Small project");
        assert_eq!(size_description(1500.0), "Large project");
        assert_eq!(size_description(8000.0), "Commercial scale");
        assert_eq!(season_description(Month::January), "Winter rates");
        assert_eq!(season_description(Month::September), "Peak season");
        assert_eq!(season_description(Month::November), "Summer rates");
    }

    #[test]
    fn test_format_multiplier() {
        assert_eq!(format_multiplier(1.15), "+15%");
        assert_eq!(format_multiplier(1.2), "+20%");
        assert_eq!(format_multiplier(0.95), "-5%");
        assert_eq!(format_multiplier(0.9), "-10%");
        assert_eq!(format_multiplier(1.0), "Standard");
    }

    #[test]
    fn test_js_round_halves_go_up() {
        assert_eq!(js_round(2.5), 3);
        assert_eq!(js_round(-2.5), -2);
        assert_eq!(js_round(-0.5), 0);
        assert_eq!(js_round(2.4999), 2);
        assert_eq!(js_round(-2.6), -3);
    }

    #[test]
    fn test_pricing_serializes_camel_case() {
        let json = serde_json::to_value(priced(1000.0, ServiceType::Commercial, Month::March)).unwrap();
        assert_eq!(json["squareFootage"], 1000.0);
        assert_eq!(json["serviceType"], "commercial");
        assert_eq!(json["factors"]["sizeMultiplier"], 1.0);
        assert_eq!(json["calculations"]["asphalt"]["avg"], 6250);
    }
}
