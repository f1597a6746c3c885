//! REST handlers for the Org-Config module.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Extension, RawQuery};
use axum::http::StatusCode;
use serde_json::Value;

use super::dto::{AddConfigResponse, CustomerQuery, MessageResponse, UploadResponse, UploadResultDto};
use super::error::ApiError;
use crate::domain::service::OrgConfigService;

pub type OrgConfigResult<T> = Result<T, ApiError>;

/// GET /
pub async fn root() -> &'static str {
    "Hello, World!"
}

/// GET /api
pub async fn api_index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from API!".to_owned(),
    })
}

/// POST /api/add-config?customerId=<id>
///
/// Store the raw JSON body under the customer id.
pub async fn add_config(
    Extension(service): Extension<Arc<OrgConfigService>>,
    RawQuery(raw): RawQuery,
    body: Bytes,
) -> OrgConfigResult<(StatusCode, Json<AddConfigResponse>)> {
    let customer_id = CustomerQuery::from_raw(raw.as_deref()).customer_id;
    let config = service.add_config(customer_id.as_deref(), &body).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddConfigResponse {
            message: "Config saved successfully".to_owned(),
            customer_id: customer_id.unwrap_or_default(),
            config,
        }),
    ))
}

/// GET /api/customer-config?customerId=<id>
pub async fn get_customer_config(
    Extension(service): Extension<Arc<OrgConfigService>>,
    RawQuery(raw): RawQuery,
) -> OrgConfigResult<Json<Value>> {
    let query = CustomerQuery::from_raw(raw.as_deref());
    let config = service.get_config(query.customer_id.as_deref()).await?;
    Ok(Json(config))
}

/// POST /api/upload-local-configs
///
/// Seed the store with the bundled organization configs.
pub async fn upload_local_configs(
    Extension(service): Extension<Arc<OrgConfigService>>,
) -> OrgConfigResult<Json<UploadResponse>> {
    let outcomes = service.upload_bundled().await?;
    let results: Vec<UploadResultDto> = outcomes.into_iter().map(Into::into).collect();

    Ok(Json(UploadResponse {
        message: "Upload complete".to_owned(),
        results,
    }))
}
