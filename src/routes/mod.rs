//! HTTP route handlers.

mod connect;
mod health;

pub use connect::{connect, ConnectQuery};
pub use health::{build_info, health, root, BuildInfoResponse, HealthResponse, RootResponse};
