//! Service configuration derived from environment variables.
//!
//! Loaded once at startup; the resolved upstream is handed to the forwarder
//! explicitly and never re-read per request.

use std::env;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;

use crate::forwarder::Mode;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_TEST_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "https://surgialgo.shop",
    "https://www.surgialgo.shop",
    "http://localhost:5173",
];

fn env_trim(name: &str) -> String {
    env::var(name).unwrap_or_default().trim().to_string()
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

fn default_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()
}

#[derive(Clone, Debug)]
pub struct Settings {
    port: u16,
    host: IpAddr,
    mode: Mode,
    upstream_base_url: String,
    upstream_timeout_ms: u64,
    cors_allowed_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        let mode = Mode::resolve(&env_trim("MODE"));

        let upstream_base_url = env_trim("UPSTREAM_BASE_URL");
        let upstream_base_url = if upstream_base_url.is_empty() {
            mode.base_url().to_string()
        } else {
            upstream_base_url.trim_end_matches('/').to_string()
        };

        let port = env_trim("PORT").parse::<u16>().unwrap_or(DEFAULT_PORT);
        let host = env_trim("HOST")
            .parse::<IpAddr>()
            .unwrap_or(IpAddr::V6(Ipv6Addr::UNSPECIFIED));
        let upstream_timeout_ms = env_trim("UPSTREAM_TIMEOUT_MS")
            .parse::<u64>()
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_MS);

        let cors_allowed_origins = parse_origins(&env_trim("CORS_ALLOWED_ORIGINS"));
        let cors_allowed_origins = if cors_allowed_origins.is_empty() {
            default_origins()
        } else {
            cors_allowed_origins
        };

        Self {
            port,
            host,
            mode,
            upstream_base_url,
            upstream_timeout_ms,
            cors_allowed_origins,
        }
    }

    pub fn for_tests() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: IpAddr::V6(Ipv6Addr::UNSPECIFIED),
            mode: Mode::Testnet,
            upstream_base_url: Mode::Testnet.base_url().to_string(),
            upstream_timeout_ms: DEFAULT_TEST_TIMEOUT_MS,
            cors_allowed_origins: default_origins(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !is_http_url(&self.upstream_base_url) {
            return Err(format!(
                "UPSTREAM_BASE_URL must start with http:// or https://, got '{}'",
                self.upstream_base_url
            ));
        }
        if self.upstream_timeout_ms == 0 {
            return Err("UPSTREAM_TIMEOUT_MS must be greater than zero".to_string());
        }
        for origin in &self.cors_allowed_origins {
            if !is_http_url(origin) || HeaderValue::from_str(origin).is_err() {
                return Err(format!("Invalid CORS origin '{origin}'"));
            }
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn upstream_base_url(&self) -> &str {
        &self.upstream_base_url
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    pub fn cors_allowed_origins(&self) -> &[String] {
        &self.cors_allowed_origins
    }

    /// Switch environment; also resets the base URL to that environment's default.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self.upstream_base_url = mode.base_url().to_string();
        self
    }

    pub fn with_upstream_base_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_upstream_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.upstream_timeout_ms = timeout_ms;
        self
    }

    pub fn with_cors_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_allowed_origins = origins;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::for_tests();
        assert_eq!(settings.mode(), Mode::Testnet);
        assert_eq!(
            settings.upstream_base_url(),
            "https://cdn-ind.testnet.deltaex.org"
        );
        assert_eq!(settings.socket_addr().port(), 3000);
        assert_eq!(settings.cors_allowed_origins().len(), 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_with_mode_resets_base_url() {
        let settings = Settings::for_tests()
            .with_upstream_base_url("http://127.0.0.1:9999")
            .with_mode(Mode::Prod);
        assert_eq!(settings.upstream_base_url(), "https://api.india.delta.exchange");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let settings = Settings::for_tests().with_upstream_base_url("http://localhost:8080/");
        assert_eq!(settings.upstream_base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://a.example , ,http://b.example/ "),
            vec!["https://a.example".to_string(), "http://b.example".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_url = Settings::for_tests().with_upstream_base_url("ftp://nope");
        assert!(bad_url.validate().is_err());

        let zero_timeout = Settings::for_tests().with_upstream_timeout_ms(0);
        assert!(zero_timeout.validate().is_err());

        let bad_origin =
            Settings::for_tests().with_cors_allowed_origins(vec!["surgialgo.shop".to_string()]);
        assert!(bad_origin.validate().is_err());
    }
}
