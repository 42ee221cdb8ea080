//! Tracing targets used by the icon core.
//!
//! The core never installs a subscriber. Binaries decide how events are
//! collected, typically with `tracing_subscriber`:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("skill_icons_core=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "skill_icons_core";
    /// Catalogue loading target.
    pub const CATALOGUE: &str = "skill_icons_core::catalogue";
    /// Alias table and name resolution target.
    pub const ALIAS: &str = "skill_icons_core::alias";
    /// Grid composition target.
    pub const GRID: &str = "skill_icons_core::grid";
}
