//! Build script for the SurgiAlgo proxy
//!
//! Embeds git SHA and build time at compile time for deployment verification.
//! Priority: CI env var → git command → "unknown"

use chrono::Utc;
use std::process::Command;

fn main() {
    // Re-embed when the checked-out commit moves (paths relative to the crate root)
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
    // CI can pin both values explicitly
    println!("cargo:rerun-if-env-changed=GIT_SHA");
    println!("cargo:rerun-if-env-changed=BUILD_TIME");

    // Priority: CI env var → `git rev-parse HEAD` → "unknown" (e.g. building from a tarball)
    let git_sha = std::env::var("GIT_SHA")
        .ok()
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|o| o.status.success())
                .and_then(|o| String::from_utf8(o.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string());

    // RFC 3339 so /build-info sorts and parses cleanly on the client side
    let build_time = std::env::var("BUILD_TIME").unwrap_or_else(|_| Utc::now().to_rfc3339());

    // Read back with env!() in routes::health::build_info
    println!("cargo:rustc-env=GIT_SHA={}", git_sha);
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);
}
