//! Liveness, health and build-info endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::forwarder::{Forwarder, Mode};

const SERVICE_NAME: &str = "surgialgo-proxy";
const ACTIVE_MESSAGE: &str = "🟢 SurgiAlgo Proxy Active";

#[derive(Serialize)]
pub struct RootResponse {
    message: String,
    mode: Mode,
}

/// Static identity plus the configured mode. Never calls the exchange.
pub async fn root(State(forwarder): State<Arc<Forwarder>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: ACTIVE_MESSAGE.to_string(),
        mode: forwarder.mode(),
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfoResponse {
    service: String,
    version: String,
    git_sha: String,
    build_time: String,
}

/// Build info endpoint for deployment verification.
/// Values are embedded at compile time via build.rs.
pub async fn build_info() -> Json<BuildInfoResponse> {
    Json(BuildInfoResponse {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_sha: env!("GIT_SHA").to_string(),
        build_time: env!("BUILD_TIME").to_string(),
    })
}
