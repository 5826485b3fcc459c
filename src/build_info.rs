//! Build metadata embedded by `build.rs`.

use serde::Serialize;

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

const RAW_BUILD_NUMBER: Option<&str> = option_env!("RECIPE_METRICS_BUILD_NUMBER");

/// Build timestamp in ISO 8601 format, or "unknown" outside cargo builds
pub const BUILD_TIMESTAMP: &str = match option_env!("RECIPE_METRICS_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Snapshot of the build metadata, serialized by the status tool
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: RAW_BUILD_NUMBER
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(0),
            build_timestamp: BUILD_TIMESTAMP,
        }
    }
}

/// Print the startup banner to stderr (stdout belongs to the MCP transport)
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  Recipe Metrics");
    eprintln!("  Version: {} | Build: {}", info.version, info.build_number);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!("===============================================");
}
