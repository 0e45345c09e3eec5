//! Traveler identity extraction.
//!
//! Identity is caller-supplied through the `X-Traveler-Id` header and
//! flows explicitly through every operation. Requests without the header
//! fall back to the configured single-user default; there is no
//! process-wide identity constant.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::foundation::TravelerId;

use super::error::ApiError;
use super::state::AppState;

/// Traveler identity resolved for one request.
#[derive(Debug, Clone)]
pub struct TravelerContext {
    pub traveler_id: TravelerId,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for TravelerContext {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match parts.headers.get("x-traveler-id") {
            Some(value) => {
                let raw = value
                    .to_str()
                    .map_err(|_| ApiError::bad_request("X-Traveler-Id is not valid UTF-8"))?;
                let traveler_id = TravelerId::new(raw)
                    .map_err(|e| ApiError::bad_request(format!("Invalid X-Traveler-Id: {}", e)))?;
                Ok(Self { traveler_id })
            }
            None => Ok(Self {
                traveler_id: state.default_traveler.clone(),
            }),
        }
    }
}
