//! HTTP test utilities for proxy integration tests.
//!
//! Provides a test app builder that mirrors the production router setup
//! while letting each test point the forwarder at its own stub upstream.
#![allow(dead_code)]

use axum::{http::StatusCode, response::Response, Router};

use surgialgo_proxy::{app::build_router, forwarder::Mode, settings::Settings};

pub mod fixtures;

/// Builder for creating test routers with a configurable upstream.
pub struct TestAppBuilder {
    settings: Settings,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            settings: Settings::for_tests(),
        }
    }

    /// Select the exchange environment (resets the base URL).
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.settings = self.settings.with_mode(mode);
        self
    }

    /// Point the forwarder at a stub server.
    pub fn with_upstream(mut self, base_url: &str) -> Self {
        self.settings = self.settings.with_upstream_base_url(base_url);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.settings = self.settings.with_upstream_timeout_ms(timeout_ms);
        self
    }

    pub fn with_origins(mut self, origins: &[&str]) -> Self {
        self.settings = self
            .settings
            .with_cors_allowed_origins(origins.iter().map(|o| o.to_string()).collect());
        self
    }

    pub fn build(self) -> Router {
        build_router(&self.settings).unwrap()
    }
}

/// Router with default test settings (testnet, no stub).
pub fn test_app() -> Router {
    TestAppBuilder::new().build()
}

/// Router whose forwarder talks to `base_url`.
pub fn test_app_with_upstream(base_url: &str) -> Router {
    TestAppBuilder::new().with_upstream(base_url).build()
}

/// Helper to parse JSON response body.
pub async fn parse_json_body(response: Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Helper to get response status and body as string (for debugging).
pub async fn response_debug(response: Response) -> (StatusCode, String) {
    use http_body_util::BodyExt;

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8_lossy(&body).to_string();
    (status, text)
}
