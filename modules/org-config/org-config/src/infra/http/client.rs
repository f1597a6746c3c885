//! Config store backed by the config REST API.
//!
//! This is how a host application sees the store: reads go to
//! `GET /api/customer-config`, writes to `POST /api/add-config`.

use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, Request, StatusCode, Uri, header};
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use org_config_sdk::{ConfigStoreClient, ConfigStoreError};
use serde_json::Value;
use url::Url;

type HttpsClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

const GET_PATH: &str = "api/customer-config";
const PUT_PATH: &str = "api/add-config";

pub struct HttpConfigStore {
    client: HttpsClient,
    base_url: Url,
}

impl HttpConfigStore {
    /// Create a client for the API rooted at `api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigStoreError::Unavailable`] when `api_url` is not an
    /// absolute http(s) URL or TLS setup fails.
    pub fn new(api_url: &str) -> Result<Self, ConfigStoreError> {
        let mut base_url = Url::parse(api_url)
            .map_err(|e| ConfigStoreError::Unavailable(format!("invalid api url '{api_url}': {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigStoreError::Unavailable(format!(
                "unsupported api url scheme: {}",
                base_url.scheme()
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let https = hyper_rustls::HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(rustls::crypto::aws_lc_rs::default_provider())
            .map_err(|e| ConfigStoreError::Unavailable(format!("TLS setup failed: {e}")))?
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build::<_, Full<Bytes>>(https);

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str, org_id: &str) -> Result<Uri, ConfigStoreError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ConfigStoreError::Unavailable(e.to_string()))?;
        url.query_pairs_mut().append_pair("customerId", org_id);
        url.as_str()
            .parse::<Uri>()
            .map_err(|e| ConfigStoreError::Unavailable(e.to_string()))
    }

    async fn send(&self, request: Request<Full<Bytes>>) -> Result<(StatusCode, Bytes), ConfigStoreError> {
        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| ConfigStoreError::Unavailable(e.to_string()))?;
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| ConfigStoreError::Unavailable(e.to_string()))?
            .to_bytes();
        Ok((status, body))
    }
}

#[async_trait]
impl ConfigStoreClient for HttpConfigStore {
    async fn get(&self, org_id: &str) -> Result<Option<Value>, ConfigStoreError> {
        let uri = self.endpoint(GET_PATH, org_id)?;
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "application/json")
            .body(Full::new(Bytes::new()))
            .map_err(|e| ConfigStoreError::Unavailable(e.to_string()))?;

        let (status, body) = self.send(request).await?;
        match status {
            StatusCode::OK => Ok(Some(serde_json::from_slice(&body)?)),
            StatusCode::NOT_FOUND => Ok(None),
            other => {
                tracing::warn!(org_id, status = other.as_u16(), "Config API returned an error");
                Err(ConfigStoreError::UnexpectedStatus {
                    status: other.as_u16(),
                })
            }
        }
    }

    async fn put(&self, org_id: &str, config: &Value) -> Result<(), ConfigStoreError> {
        let uri = self.endpoint(PUT_PATH, org_id)?;
        let payload = serde_json::to_vec(config)?;
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(payload)))
            .map_err(|e| ConfigStoreError::Unavailable(e.to_string()))?;

        let (status, _) = self.send(request).await?;
        if status.is_success() {
            Ok(())
        } else {
            Err(ConfigStoreError::UnexpectedStatus {
                status: status.as_u16(),
            })
        }
    }
}
