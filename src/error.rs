//! Error types for the signing proxy

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Missing API credentials")]
    MissingCredentials,

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// The exchange answered with a non-success status.
    #[error("{message}")]
    Upstream {
        status: StatusCode,
        message: String,
        details: Option<Value>,
    },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MissingCredentials => StatusCode::BAD_REQUEST,
            ProxyError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build an upstream error from the status and raw body returned by the exchange.
    ///
    /// Delta reports failures as `{"success":false,"error":{"code":"..."}}`;
    /// plain-string errors and non-JSON bodies are also accepted.
    pub fn from_upstream(status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
        let details = serde_json::from_str::<Value>(body).ok();

        let message = match details.as_ref().and_then(|value| value.get("error")) {
            Some(Value::String(message)) if !message.is_empty() => message.clone(),
            Some(Value::Object(error)) => match error.get("code").and_then(Value::as_str) {
                Some(code) => code.to_string(),
                None => Value::Object(error.clone()).to_string(),
            },
            _ if details.is_none() && !body.trim().is_empty() => body.trim().to_string(),
            _ => format!(
                "Upstream request failed with status {}",
                status.as_u16()
            ),
        };

        ProxyError::Upstream {
            status,
            message,
            details,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("Upstream request timed out: {err}"))
        } else if err.is_connect() {
            Self::Transport(format!("Upstream connection failed: {err}"))
        } else {
            Self::Transport(format!("Upstream request failed: {err}"))
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        let body = match self {
            ProxyError::Upstream {
                details: Some(details),
                ..
            } => json!({
                "success": false,
                "error": message,
                "details": details,
            }),
            _ => json!({
                "success": false,
                "error": message,
            }),
        };

        (status, Json(body)).into_response()
    }
}
