use paveline_core::models::{EstimateReceipt, EstimateSubmission, MeasurementResult, ServiceType};
use paveline_estimate::pricing::{calculate_pricing_in, current_month};
use paveline_estimate::validate_form;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Service for receiving estimate requests
pub struct EstimateService;

impl EstimateService {
    /// Validate and acknowledge a submission
    ///
    /// Requests are logged, not stored. An estimate is computed when the
    /// request carries an area but no estimate of its own.
    pub fn receive(
        state: &AppState,
        submission: EstimateSubmission,
    ) -> Result<EstimateReceipt, ApiError> {
        let validation = validate_form(&submission.form);
        if !validation.is_valid {
            tracing::info!(errors = ?validation.errors, "Rejected estimate request");
            return Err(ApiError::unprocessable(validation));
        }

        let estimate = match submission.estimate {
            Some(estimate) => Some(estimate),
            None => submission
                .form
                .area_data
                .as_ref()
                .and_then(|data| data.area)
                .filter(|area| *area > 0.0)
                .map(|area| {
                    let service_type = ServiceType::parse_or_default(&submission.form.service_type);
                    let month = state.pricing_month.unwrap_or_else(current_month);
                    calculate_pricing_in(&MeasurementResult::from_square_feet(area), service_type, month)
                }),
        };

        let reference_number = Self::reference_number();
        tracing::info!(
            reference = %reference_number,
            service_type = %submission.form.service_type,
            area = ?submission.form.area_data.as_ref().and_then(|data| data.area),
            submitted_at = %submission.submitted_at,
            "Estimate request received"
        );

        Ok(EstimateReceipt {
            success: true,
            reference_number: Some(reference_number),
            estimate,
            message: Some("Estimate request submitted successfully".to_string()),
        })
    }

    /// `EST-` followed by eight uppercase hex digits
    fn reference_number() -> String {
        let id = Uuid::new_v4().simple().to_string();
        format!("EST-{}", id[..8].to_uppercase())
    }
}
