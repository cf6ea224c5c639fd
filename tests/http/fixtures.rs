//! Request URIs and upstream stub bodies shared by the HTTP tests.
#![allow(dead_code)]

use tokio::net::TcpListener;

pub const API_KEY: &str = "AAA";
pub const API_SECRET: &str = "BBB";

/// An address nothing listens on; connecting fails immediately.
pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:1";

pub const PRODUCTS_PATH: &str = "/v2/products";

/// `/api/connect` with both credentials.
pub fn connect_uri(api_key: &str, api_secret: &str) -> String {
    format!("/api/connect?apiKey={api_key}&apiSecret={api_secret}")
}

/// `/api/connect` with the default test credentials.
pub fn valid_connect_uri() -> String {
    connect_uri(API_KEY, API_SECRET)
}

pub fn single_product_body() -> &'static str {
    r#"{"success":true,"result":[{"id":1}]}"#
}

pub fn two_products_body() -> &'static str {
    r#"{"success":true,"result":[{"id":27,"symbol":"BTCUSD"},{"id":3136,"symbol":"ETHUSD"}]}"#
}

pub fn body_without_result() -> &'static str {
    r#"{"success":true}"#
}

pub fn invalid_api_key_body() -> &'static str {
    r#"{"success":false,"error":{"code":"invalid_api_key","context":{}}}"#
}

pub fn malformed_json() -> &'static str {
    r#"{ "result": [ {"id": 1 "#
}

/// Start a TCP listener that accepts connections but never answers.
///
/// Returns the base URL; the listener task lives for the rest of the test.
pub async fn silent_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            match listener.accept().await {
                Ok((socket, _)) => held.push(socket),
                Err(_) => break,
            }
        }
    });

    format!("http://{addr}")
}
