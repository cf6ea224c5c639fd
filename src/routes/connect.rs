//! Signed connect endpoint.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::ProxyError;
use crate::forwarder::{Credentials, Forwarder, ProductsPayload};

/// Credentials arrive as query parameters; both are checked by hand so a
/// missing or unparsable one yields the JSON error envelope rather than an
/// extractor rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectQuery {
    api_key: Option<String>,
    api_secret: Option<String>,
}

#[tracing::instrument(skip_all)]
pub async fn connect(
    State(forwarder): State<Arc<Forwarder>>,
    query: Result<Query<ConnectQuery>, QueryRejection>,
) -> Result<Json<ProductsPayload>, ProxyError> {
    let credentials = match query
        .map_err(|rejection| ProxyError::InvalidQuery(rejection.body_text()))
        .and_then(|Query(query)| Credentials::from_parts(query.api_key, query.api_secret))
    {
        Ok(credentials) => credentials,
        Err(err) => {
            tracing::warn!("Rejected /api/connect: {err}");
            return Err(err);
        }
    };

    match forwarder.fetch_products(&credentials).await {
        Ok(payload) => {
            tracing::info!(
                api_key = %credentials.redacted_key(),
                count = payload.count,
                "Connected to exchange"
            );
            Ok(Json(payload))
        }
        Err(err) => {
            tracing::error!(
                api_key = %credentials.redacted_key(),
                status = err.status_code().as_u16(),
                "Error in /api/connect: {err}"
            );
            Err(err)
        }
    }
}
