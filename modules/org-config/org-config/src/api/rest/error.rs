//! REST error mapping for the Org-Config module.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::ErrorResponse;
use crate::domain::error::DomainError;

/// Domain error rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl ApiError {
    #[must_use]
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            DomainError::MissingCustomerId => (StatusCode::BAD_REQUEST, "customerId is required"),
            DomainError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "Invalid JSON body"),
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "Config not found"),
            DomainError::SaveFailed { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save config")
            }
            DomainError::RetrieveFailed { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve config")
            }
            DomainError::BundledConfig { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load config files")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: message.to_owned(),
            }),
        )
            .into_response()
    }
}
