//! Tracing setup for the server binary.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Target names for log filtering.
pub mod targets {
    /// Request handling target.
    pub const HTTP: &str = "skill_icons_server::http";
    /// Server lifecycle target.
    pub const SERVER: &str = "skill_icons_server::server";
    /// Configuration loading target.
    pub const CONFIG: &str = "skill_icons_server::config";
}

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins over `level`. Calling this more than once is harmless;
/// later calls are ignored.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
