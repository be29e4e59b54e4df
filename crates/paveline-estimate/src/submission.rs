//! Estimate submission
//!
//! [`EstimateAdapter`] turns a filled-in form into an [`EstimateSubmission`]
//! and hands it to an [`EstimateTransport`]. Forms that fail validation are
//! never sent.

use async_trait::async_trait;
use chrono::Month;
use paveline_core::error::{PavelineError, Result};
use paveline_core::models::{
    EstimateReceipt, EstimateSubmission, FormData, MeasurementResult, PricingResult, ServiceType,
    ValidationOutcome,
};

use crate::pricing::{calculate_pricing_in, current_month};
use crate::validation::validate_form;

/// Path of the estimate endpoint, relative to the backend base URL
pub const ESTIMATES_PATH: &str = "/api/estimates";

/// Port for delivering estimate requests to the backend
#[async_trait]
pub trait EstimateTransport: Send + Sync {
    /// Deliver one submission; a single attempt, no retries
    async fn submit(&self, submission: &EstimateSubmission) -> Result<EstimateReceipt>;
}

/// JSON-over-HTTP transport
pub struct HttpTransport {
    /// Base URL of the backend (e.g., "http://localhost:8001")
    base_url: String,

    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client: reqwest::Client::new() }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ESTIMATES_PATH)
    }
}

#[async_trait]
impl EstimateTransport for HttpTransport {
    async fn submit(&self, submission: &EstimateSubmission) -> Result<EstimateReceipt> {
        let endpoint = self.endpoint();
        tracing::debug!(endpoint = %endpoint, "Posting estimate request");

        let response = self.client.post(&endpoint).json(submission).send().await.map_err(|e| {
            PavelineError::Transport {
                reason: format!("Failed to reach estimate backend at {}: {}", self.base_url, e),
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PavelineError::Transport {
                reason: format!("Estimate backend error ({}): {}", status, error_text),
            });
        }

        response.json::<EstimateReceipt>().await.map_err(|e| PavelineError::Transport {
            reason: format!("Failed to parse estimate backend response: {}", e),
        })
    }
}

/// Result of trying to submit a form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The form has hard validation errors and was not sent
    Rejected(ValidationOutcome),
    /// The backend accepted the request
    Submitted { receipt: EstimateReceipt, validation: ValidationOutcome },
}

impl SubmissionOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionOutcome::Submitted { .. })
    }

    pub fn validation(&self) -> &ValidationOutcome {
        match self {
            SubmissionOutcome::Rejected(validation) => validation,
            SubmissionOutcome::Submitted { validation, .. } => validation,
        }
    }
}

/// Validates, prices and submits estimate forms
pub struct EstimateAdapter<T> {
    transport: T,
    month: Option<Month>,
}

impl<T: EstimateTransport> EstimateAdapter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, month: None }
    }

    /// Price every submission as if it were made in `month`
    pub fn with_month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Assemble the outbound payload, pricing the form's area when it has one
    pub fn prepare(&self, form: FormData) -> EstimateSubmission {
        let estimate = self.price(&form);
        EstimateSubmission::new(form, estimate)
    }

    /// Validate and submit a form
    ///
    /// Transport failures are returned as errors; validation failures are
    /// reported as [`SubmissionOutcome::Rejected`].
    pub async fn submit(&self, form: FormData) -> Result<SubmissionOutcome> {
        let validation = validate_form(&form);
        if !validation.is_valid {
            tracing::info!(errors = validation.errors.len(), "Estimate form rejected");
            return Ok(SubmissionOutcome::Rejected(validation));
        }

        let submission = self.prepare(form);
        let receipt = self.transport.submit(&submission).await?;

        tracing::info!(
            reference = receipt.reference_number.as_deref().unwrap_or("-"),
            success = receipt.success,
            "Estimate request submitted"
        );

        Ok(SubmissionOutcome::Submitted { receipt, validation })
    }

    fn price(&self, form: &FormData) -> Option<PricingResult> {
        let area = form.area_data.as_ref()?.area.filter(|a| *a > 0.0)?;
        let measurement = MeasurementResult::from_square_feet(area);
        let service_type = ServiceType::parse_or_default(&form.service_type);
        let month = self.month.unwrap_or_else(current_month);
        Some(calculate_pricing_in(&measurement, service_type, month))
    }
}
