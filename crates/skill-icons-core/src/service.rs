//! The read-only icon service shared by request handlers.

use std::collections::BTreeMap;

use crate::alias::{AliasPolicy, AliasResolver};
use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::grid;
use crate::normalize;
use crate::request::{RequestError, RequestSpec};
use crate::theme::Theme;

/// Catalogue plus derived lookup tables, built once at startup.
///
/// The service holds no interior mutability. Wrap it in an `Arc` and hand
/// clones to every handler.
///
/// # Example
///
/// ```ignore
/// use skill_icons_core::{AliasPolicy, Catalogue, IconService, RequestSpec};
///
/// let service = IconService::new(Catalogue::embedded()?, AliasPolicy::Lenient)?;
///
/// let keys = service.resolve(&["js", "react"], Theme::Light);
/// let svg = service.compose(&keys, 15);
///
/// // Or validate and render in one go
/// let spec = RequestSpec::from_params(Some("js,react"), Some("light"), None)?;
/// let svg = service.render(&spec)?;
/// ```
#[derive(Debug, Clone)]
pub struct IconService {
    catalogue: Catalogue,
    resolver: AliasResolver,
}

impl IconService {
    /// Build the service from a loaded catalogue.
    pub fn new(catalogue: Catalogue, policy: AliasPolicy) -> Result<Self> {
        let resolver = AliasResolver::new(&catalogue, policy)?;
        Ok(Self {
            catalogue,
            resolver,
        })
    }

    /// Build the service from the embedded catalogue.
    pub fn embedded(policy: AliasPolicy) -> Result<Self> {
        Self::new(Catalogue::embedded()?, policy)
    }

    /// The underlying catalogue.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// The derived name tables.
    pub fn resolver(&self) -> &AliasResolver {
        &self.resolver
    }

    /// Every canonical icon name, sorted, each exactly once.
    pub fn list_canonical_names(&self) -> &[String] {
        self.resolver.canonical_names()
    }

    /// Every catalogue key with its markup.
    pub fn list_all_entries(&self) -> &BTreeMap<String, String> {
        self.catalogue.entries()
    }

    /// Resolve tokens to catalogue keys, dropping unknown ones.
    ///
    /// A themed name whose variant for `theme` is missing from the
    /// catalogue is dropped too.
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S], theme: Theme) -> Vec<String> {
        let mut keys = normalize::resolve(&self.resolver, tokens, theme);
        keys.retain(|key| self.catalogue.contains(key));
        keys
    }

    /// Compose catalogue keys into a grid SVG.
    pub fn compose<S: AsRef<str>>(&self, keys: &[S], per_line: usize) -> String {
        grid::compose(&self.catalogue, keys, per_line)
    }

    /// Resolve and compose a validated request.
    ///
    /// Fails with [`RequestError::Unresolvable`] when no requested icon
    /// exists.
    pub fn render(&self, spec: &RequestSpec) -> std::result::Result<String, RequestError> {
        let tokens = spec.selection.tokens(&self.resolver);
        let keys = self.resolve(&tokens, spec.theme);
        if keys.is_empty() {
            return Err(RequestError::Unresolvable);
        }
        Ok(self.compose(&keys, spec.per_line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IconService>();
    }

    #[test]
    fn render_rejects_unresolvable() {
        let service = IconService::embedded(AliasPolicy::Strict).unwrap();
        let spec = RequestSpec::new(["nope", "also-nope"]);
        assert_eq!(service.render(&spec), Err(RequestError::Unresolvable));
    }

    fn single_variant_service() -> IconService {
        let entries = BTreeMap::from([
            ("foo-light".to_string(), "<svg>foo</svg>".to_string()),
            ("bar".to_string(), "<svg>bar</svg>".to_string()),
        ]);
        IconService::new(Catalogue::from_entries(entries).unwrap(), AliasPolicy::Lenient).unwrap()
    }

    #[test]
    fn render_rejects_missing_theme_variant() {
        let service = single_variant_service();
        let spec = RequestSpec::new(["foo"]).theme(Theme::Dark);
        assert_eq!(service.render(&spec), Err(RequestError::Unresolvable));
    }

    #[test]
    fn resolve_drops_missing_theme_variant() {
        let service = single_variant_service();
        assert_eq!(service.resolve(&["foo", "bar"], Theme::Dark), vec!["bar"]);
        assert_eq!(
            service.resolve(&["foo", "bar"], Theme::Light),
            vec!["foo-light", "bar"]
        );

        let spec = RequestSpec::new(["foo", "bar"]).theme(Theme::Dark);
        let svg = service.render(&spec).unwrap();
        assert_eq!(svg.matches("<g transform=").count(), 1);
    }

    #[test]
    fn render_all() {
        let service = IconService::embedded(AliasPolicy::Strict).unwrap();
        let spec = RequestSpec::from_params(Some("all"), None, Some("50")).unwrap();
        let svg = service.render(&spec).unwrap();
        assert_eq!(
            svg.matches("<g transform=").count(),
            service.list_canonical_names().len()
        );
    }

    #[test]
    fn all_inside_list_is_literal() {
        let service = IconService::embedded(AliasPolicy::Strict).unwrap();
        let spec = RequestSpec::from_params(Some("all,js"), None, None).unwrap();
        let svg = service.render(&spec).unwrap();
        assert_eq!(svg.matches("<g transform=").count(), 1);
    }
}
