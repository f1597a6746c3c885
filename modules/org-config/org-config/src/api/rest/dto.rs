//! Request and response bodies of the config API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::service::UploadOutcome;

/// `?customerId=<id>` query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    pub customer_id: Option<String>,
}

impl CustomerQuery {
    /// Parse a raw query string. When `customerId` repeats, the first value wins.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let customer_id = raw.and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "customerId")
                .map(|(_, value)| value.into_owned())
        });
        Self { customer_id }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddConfigResponse {
    pub message: String,
    pub customer_id: String,
    pub config: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub results: Vec<UploadResultDto>,
}

/// One entry of the upload report.
///
/// Serialized as `{"success":true,"orgId":..}` or `{"error":..,"orgId":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UploadResultDto {
    Saved {
        success: bool,
        #[serde(rename = "orgId")]
        org_id: String,
    },
    Failed {
        error: String,
        #[serde(rename = "orgId")]
        org_id: String,
    },
}

impl From<UploadOutcome> for UploadResultDto {
    fn from(outcome: UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::Saved { org_id } => Self::Saved {
                success: true,
                org_id,
            },
            UploadOutcome::Failed { org_id } => Self::Failed {
                error: format!("Failed to save config for {org_id}"),
                org_id,
            },
        }
    }
}
