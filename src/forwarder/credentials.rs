//! Caller-supplied exchange credentials.
//!
//! The secret is wrapped in `SecretString` so it never shows up in `Debug`
//! output or log fields.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ProxyError;

pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        }
    }

    /// Build credentials from optional query values.
    ///
    /// # Errors
    /// Returns `ProxyError::MissingCredentials` if either value is absent or blank.
    pub fn from_parts(
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Result<Self, ProxyError> {
        let api_key = api_key.filter(|value| !value.trim().is_empty());
        let api_secret = api_secret.filter(|value| !value.trim().is_empty());

        match (api_key, api_secret) {
            (Some(api_key), Some(api_secret)) => Ok(Self::new(api_key, api_secret)),
            _ => Err(ProxyError::MissingCredentials),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Short, log-safe form of the api key.
    pub fn redacted_key(&self) -> String {
        let prefix: String = self.api_key.chars().take(4).collect();
        format!("{prefix}…")
    }

    /// Only for HMAC keying. Never log the return value.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.redacted_key())
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
