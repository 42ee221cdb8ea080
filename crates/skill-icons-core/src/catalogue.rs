//! The icon catalogue: an immutable map from icon key to SVG markup.
//!
//! Keys are either a bare base name (`javascript`) or a base name with a
//! theme suffix (`react-dark`, `react-light`). Values are complete SVG
//! documents or `<g>`-compatible fragments, inserted verbatim into composed
//! output.
//!
//! # Example
//!
//! ```ignore
//! use skill_icons_core::Catalogue;
//!
//! // The catalogue compiled into the binary
//! let catalogue = Catalogue::embedded()?;
//!
//! // Or a prebuilt file shipped next to the deployment
//! let catalogue = Catalogue::from_path("dist/icons.json")?;
//!
//! let markup = catalogue.get("javascript");
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::logging::targets;

/// Catalogue data compiled into the binary.
pub const EMBEDDED_CATALOGUE: &str = include_str!("../assets/icons.json");

/// Immutable icon key to SVG markup mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    entries: BTreeMap<String, String>,
}

impl Catalogue {
    /// Parse a catalogue from a JSON object of `key: markup` pairs.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Read and parse a catalogue file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let catalogue = Self::from_json_str(&json)?;
        tracing::info!(
            target: targets::CATALOGUE,
            path = %path.display(),
            icons = catalogue.len(),
            "Loaded icon catalogue"
        );
        Ok(catalogue)
    }

    /// The catalogue compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_CATALOGUE)
    }

    /// Build a catalogue from already-parsed entries.
    pub fn from_entries(entries: BTreeMap<String, String>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CoreError::EmptyCatalogue);
        }
        Ok(Self { entries })
    }

    /// Get the markup for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries, counting each themed variant separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalogue.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The full key to markup mapping.
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_object_of_strings() {
        let catalogue =
            Catalogue::from_json_str(r#"{"b": "<svg/>", "a-dark": "<g/>"}"#).unwrap();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.get("b"), Some("<svg/>"));
        assert!(catalogue.contains("a-dark"));
        assert!(!catalogue.contains("a"));
        assert_eq!(catalogue.keys().collect::<Vec<_>>(), vec!["a-dark", "b"]);
    }

    #[test]
    fn reject_non_string_values() {
        let err = Catalogue::from_json_str(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, CoreError::CatalogueParse(_)));

        let err = Catalogue::from_json_str("[]").unwrap_err();
        assert!(matches!(err, CoreError::CatalogueParse(_)));
    }

    #[test]
    fn reject_empty() {
        let err = Catalogue::from_json_str("{}").unwrap_err();
        assert!(matches!(err, CoreError::EmptyCatalogue));
    }

    #[test]
    fn embedded_catalogue_loads() {
        let catalogue = Catalogue::embedded().unwrap();
        assert!(catalogue.contains("javascript"));
        assert!(catalogue.contains("react-dark"));
        assert!(catalogue.contains("react-light"));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = Catalogue::from_path(&path).unwrap_err();
        match err {
            CoreError::CatalogueIo { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.json");
        std::fs::write(&path, r#"{"rust-dark": "<svg/>", "rust-light": "<svg/>"}"#).unwrap();
        let catalogue = Catalogue::from_path(&path).unwrap();
        assert_eq!(catalogue.len(), 2);
    }
}
