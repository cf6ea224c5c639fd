//! Signing forwarder for the Delta Exchange products endpoint.
//!
//! Each call signs a fresh `GET /v2/products` with the caller's secret and
//! relays the exchange's answer as a normalized payload.

mod client;
mod credentials;
mod mode;
mod signing;

pub use client::{Forwarder, ProductsPayload, USER_AGENT};
pub use credentials::Credentials;
pub use mode::{Mode, PROD_BASE_URL, TESTNET_BASE_URL};
pub use signing::{sign, signature_payload, SignedRequest, PRODUCTS_METHOD, PRODUCTS_PATH};
