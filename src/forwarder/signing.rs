//! HMAC-SHA256 request signing for the Delta Exchange API.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

pub const PRODUCTS_METHOD: &str = "GET";
pub const PRODUCTS_PATH: &str = "/v2/products";

/// The exact bytes Delta authenticates: `method + timestamp + path`.
pub fn signature_payload(method: &str, timestamp: &str, path: &str) -> String {
    format!("{method}{timestamp}{path}")
}

/// Lowercase hex HMAC-SHA256 of the signature payload, keyed with `secret`.
pub fn sign(secret: &str, method: &str, timestamp: &str, path: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(signature_payload(method, timestamp, path).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// A signed request descriptor. Never reused across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: &'static str,
    pub path: &'static str,
    pub timestamp: String,
    pub signature: String,
}

impl SignedRequest {
    pub fn new(
        credentials: &Credentials,
        method: &'static str,
        path: &'static str,
        timestamp_secs: i64,
    ) -> Self {
        let timestamp = timestamp_secs.to_string();
        let signature = sign(credentials.expose_secret(), method, &timestamp, path);
        Self {
            method,
            path,
            timestamp,
            signature,
        }
    }

    /// Sign with the current Unix time in seconds.
    pub fn now(credentials: &Credentials, method: &'static str, path: &'static str) -> Self {
        Self::new(credentials, method, path, Utc::now().timestamp())
    }
}
