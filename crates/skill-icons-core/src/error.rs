//! Error types for the icon core.

use std::path::PathBuf;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while loading the catalogue or building the resolver.
///
/// These only occur at startup. Request-time failures are reported through
/// [`RequestError`](crate::RequestError) instead.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The catalogue file could not be read.
    #[error("Failed to read icon catalogue '{path}': {source}")]
    CatalogueIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalogue is not a JSON object of strings.
    #[error("Invalid icon catalogue: {0}")]
    CatalogueParse(#[from] serde_json::Error),

    /// The catalogue parsed but holds no icons.
    #[error("Icon catalogue is empty")]
    EmptyCatalogue,

    /// Alias targets missing from the catalogue (strict alias policy only).
    #[error("Aliases point at unknown icons: {}", .0.join(", "))]
    DanglingAliases(Vec<String>),
}

impl CoreError {
    /// Create a catalogue I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CatalogueIo {
            path: path.into(),
            source,
        }
    }
}
