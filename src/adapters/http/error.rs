//! API error type mapping the core taxonomy onto HTTP responses.
//!
//! Every failure returns a distinct kind so a client can tell "nothing to
//! show" (404) from "try again" (502) from "fix your input" (400).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::application::handlers::{
    AdaptItineraryError, CareModeError, ConfirmPivotError, CreateBudgetItemError,
    GenerateTripError, ProposePivotError, RecordMoodError, UpdateActivityError,
};
use crate::domain::foundation::DomainError;

/// JSON body returned for every error.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// API error classified by HTTP status.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// Generator failed; the caller may retry.
    BadGateway(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", message)
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "NOT_FOUND", message),
            ApiError::BadGateway(message) => {
                (StatusCode::BAD_GATEWAY, "GENERATION_FAILED", message)
            }
            ApiError::Internal(message) => {
                tracing::error!(%message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    message,
                )
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        use crate::domain::foundation::ErrorCode;
        if err.code.is_not_found() {
            ApiError::NotFound(err.message)
        } else if matches!(
            err.code,
            ErrorCode::ValidationFailed
                | ErrorCode::EmptyField
                | ErrorCode::OutOfRange
                | ErrorCode::InvalidFormat
        ) {
            ApiError::BadRequest(err.message)
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<RecordMoodError> for ApiError {
    fn from(err: RecordMoodError) -> Self {
        match err {
            RecordMoodError::TripNotFound(id) => {
                ApiError::NotFound(format!("Trip not found: {}", id))
            }
            RecordMoodError::Domain(e) => e.into(),
        }
    }
}

impl From<ProposePivotError> for ApiError {
    fn from(err: ProposePivotError) -> Self {
        match err {
            ProposePivotError::TripNotFound(id) => {
                ApiError::NotFound(format!("Trip not found: {}", id))
            }
            ProposePivotError::ActivityNotFound(id) => {
                ApiError::NotFound(format!("Activity not found: {}", id))
            }
            ProposePivotError::GenerationFailed(e) => ApiError::BadGateway(e.to_string()),
            ProposePivotError::Domain(e) => e.into(),
        }
    }
}

impl From<ConfirmPivotError> for ApiError {
    fn from(err: ConfirmPivotError) -> Self {
        match err {
            ConfirmPivotError::ActivityNotFound(id) => {
                ApiError::NotFound(format!("Activity not found: {}", id))
            }
            ConfirmPivotError::Domain(e) => e.into(),
        }
    }
}

impl From<UpdateActivityError> for ApiError {
    fn from(err: UpdateActivityError) -> Self {
        match err {
            UpdateActivityError::ActivityNotFound(id) => {
                ApiError::NotFound(format!("Activity not found: {}", id))
            }
            UpdateActivityError::Domain(e) => e.into(),
        }
    }
}

impl From<CreateBudgetItemError> for ApiError {
    fn from(err: CreateBudgetItemError) -> Self {
        match err {
            CreateBudgetItemError::Validation(e) => ApiError::BadRequest(e.to_string()),
            CreateBudgetItemError::Domain(e) => e.into(),
        }
    }
}

impl From<GenerateTripError> for ApiError {
    fn from(err: GenerateTripError) -> Self {
        match err {
            GenerateTripError::EmptyContent => {
                ApiError::BadRequest("message content cannot be empty".to_string())
            }
            GenerateTripError::GenerationFailed(e) => ApiError::BadGateway(e.to_string()),
            GenerateTripError::Domain(e) => e.into(),
        }
    }
}

impl From<AdaptItineraryError> for ApiError {
    fn from(err: AdaptItineraryError) -> Self {
        match err {
            AdaptItineraryError::TripNotFound(id) => {
                ApiError::NotFound(format!("Trip not found: {}", id))
            }
            AdaptItineraryError::GenerationFailed(e) => ApiError::BadGateway(e.to_string()),
            AdaptItineraryError::Domain(e) => e.into(),
        }
    }
}

impl From<CareModeError> for ApiError {
    fn from(err: CareModeError) -> Self {
        match err {
            CareModeError::Validation(e) => ApiError::BadRequest(e.to_string()),
            CareModeError::GenerationFailed(e) => ApiError::BadGateway(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn domain_not_found_maps_to_404() {
        let err: ApiError = DomainError::new(ErrorCode::TripNotFound, "Trip not found").into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn domain_validation_maps_to_400() {
        let err: ApiError = DomainError::new(ErrorCode::EmptyField, "empty").into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn generation_failure_maps_to_502() {
        let err: ApiError = GenerateTripError::GenerationFailed(
            crate::ports::GeneratorError::unavailable("down"),
        )
        .into();
        assert!(matches!(err, ApiError::BadGateway(_)));
    }

    #[test]
    fn storage_errors_map_to_500() {
        let err: ApiError = DomainError::new(ErrorCode::StorageError, "boom").into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
