//! SurgiAlgo Proxy Library
//!
//! Forwards a signed, read-only products request to the Delta Exchange
//! India API on behalf of a caller that supplies its own credentials.
//!
//! This library module exposes the router and forwarder for use in integration tests.

pub mod app;
pub mod error;
pub mod forwarder;
pub mod routes;
pub mod settings;
pub mod telemetry;
