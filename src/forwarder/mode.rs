//! Upstream environment selection.

use std::fmt;

use serde::Serialize;

pub const PROD_BASE_URL: &str = "https://api.india.delta.exchange";
pub const TESTNET_BASE_URL: &str = "https://cdn-ind.testnet.deltaex.org";

/// Which exchange environment the proxy forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Prod,
    #[default]
    Testnet,
}

impl Mode {
    /// Resolve a `MODE` value. Only `prod` selects production.
    pub fn resolve(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("prod") {
            Mode::Prod
        } else {
            Mode::Testnet
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Mode::Prod => PROD_BASE_URL,
            Mode::Testnet => TESTNET_BASE_URL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Prod => "prod",
            Mode::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
