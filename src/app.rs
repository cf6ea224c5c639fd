//! Router construction for the proxy HTTP API.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method, Request},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::{error::ProxyError, forwarder::Forwarder, routes, settings::Settings};

/// Origins come from settings; methods and headers are fixed.
pub fn cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allowed_origins()
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static("api-key"),
            HeaderName::from_static("timestamp"),
            HeaderName::from_static("signature"),
        ])
}

/// Request span carrying only the path; the query holds caller credentials.
fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version()
    )
}

pub fn build_router(settings: &Settings) -> Result<Router, ProxyError> {
    let forwarder = Arc::new(Forwarder::new(settings)?);

    Ok(Router::new()
        .route("/", get(routes::root))
        .route("/api/connect", get(routes::connect))
        .route("/health", get(routes::health))
        .route("/build-info", get(routes::build_info))
        .with_state(forwarder)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(cors_layer(settings)))
}
