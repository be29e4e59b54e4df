use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paveline_core::error::PavelineError;
use paveline_core::models::ValidationOutcome;
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
    pub validation: Option<ValidationOutcome>,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), details: None, validation: None }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// The request was well-formed but failed validation
    pub fn unprocessable(validation: ValidationOutcome) -> Self {
        let mut error = Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation failed");
        error.details = Some(validation.message());
        error.validation = Some(validation);
        error
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<ValidationOutcome>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.message,
            details: self.details,
            validation: self.validation,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<PavelineError> for ApiError {
    fn from(err: PavelineError) -> Self {
        match &err {
            PavelineError::MissingRing | PavelineError::UnknownServiceType { .. } => {
                Self::bad_request("Invalid request").with_details(err.to_string())
            }
            _ => Self::internal("Internal error").with_details(err.to_string()),
        }
    }
}
