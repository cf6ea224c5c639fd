//! Outbound client for the products endpoint.

use reqwest::header::USER_AGENT as USER_AGENT_HEADER;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;

use super::credentials::Credentials;
use super::mode::Mode;
use super::signing::{SignedRequest, PRODUCTS_METHOD, PRODUCTS_PATH};
use crate::error::ProxyError;
use crate::settings::Settings;

/// Identifies the proxy to the exchange.
pub const USER_AGENT: &str = "surgialgo-proxy";

/// Normalized success payload returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsPayload {
    pub success: bool,
    pub mode: Mode,
    pub count: usize,
    pub result: Vec<Value>,
}

impl ProductsPayload {
    /// Keep only the upstream `result` list. Anything that is not an array counts as empty.
    pub fn from_upstream(mode: Mode, data: Value) -> Self {
        let result = match data {
            Value::Object(mut fields) => match fields.remove("result") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        Self {
            success: true,
            mode,
            count: result.len(),
            result,
        }
    }
}

/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Forwarder {
    http_client: Client,
    base_url: String,
    mode: Mode,
}

impl Forwarder {
    /// Build a forwarder bound to the upstream chosen in `settings`.
    pub fn new(settings: &Settings) -> Result<Self, ProxyError> {
        let http_client = Client::builder()
            .timeout(settings.upstream_timeout())
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: settings.upstream_base_url().to_string(),
            mode: settings.mode(),
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Build the outbound request for an already signed descriptor.
    pub fn signed_request(
        &self,
        credentials: &Credentials,
        signed: &SignedRequest,
    ) -> Result<reqwest::Request, ProxyError> {
        let method = Method::from_bytes(signed.method.as_bytes())
            .map_err(|e| ProxyError::Internal(format!("Invalid upstream method: {e}")))?;

        self.http_client
            .request(method, format!("{}{}", self.base_url, signed.path))
            .header("api-key", credentials.api_key())
            .header("timestamp", signed.timestamp.as_str())
            .header("signature", signed.signature.as_str())
            .header(USER_AGENT_HEADER, USER_AGENT)
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to build upstream request: {e}")))
    }

    /// Sign and send `GET /v2/products`, then normalize the response.
    #[tracing::instrument(
        skip_all,
        fields(api_key = %credentials.redacted_key(), mode = %self.mode)
    )]
    pub async fn fetch_products(
        &self,
        credentials: &Credentials,
    ) -> Result<ProductsPayload, ProxyError> {
        let signed = SignedRequest::now(credentials, PRODUCTS_METHOD, PRODUCTS_PATH);
        let request = self.signed_request(credentials, &signed)?;
        let response = self.http_client.execute(request).await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Upstream rejected products request");
            return Err(ProxyError::from_upstream(status.as_u16(), &body));
        }

        let data: Value = serde_json::from_str(&body)
            .map_err(|e| ProxyError::Decode(format!("Malformed upstream response: {e}")))?;

        let payload = ProductsPayload::from_upstream(self.mode, data);
        tracing::debug!(count = payload.count, "Upstream products received");
        Ok(payload)
    }
}
