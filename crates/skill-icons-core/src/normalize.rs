//! Turning user-supplied tokens into catalogue keys.

use crate::alias::AliasResolver;
use crate::theme::Theme;

/// The literal icon-list value that selects every canonical icon.
pub const ALL_ICONS: &str = "all";

/// Which icons a request asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSelection {
    /// Every canonical icon, in sorted order.
    All,
    /// An explicit list of tokens, in request order.
    Names(Vec<String>),
}

impl IconSelection {
    /// Parse the raw icon-list parameter.
    ///
    /// Only the exact value `all` selects everything; `all` inside a comma
    /// list is an ordinary token.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_ICONS {
            IconSelection::All
        } else {
            IconSelection::Names(raw.split(',').map(str::to_string).collect())
        }
    }

    /// Expand the selection into concrete tokens.
    pub fn tokens<'a>(&'a self, resolver: &'a AliasResolver) -> Vec<&'a str> {
        match self {
            IconSelection::All => resolver
                .canonical_names()
                .iter()
                .map(String::as_str)
                .collect(),
            IconSelection::Names(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// Resolve tokens to catalogue keys.
///
/// Each token is matched against canonical names first, then the alias
/// table. Tokens that match neither are dropped. Themed icons get the theme
/// suffix appended. Output order follows input order.
pub fn resolve<S: AsRef<str>>(resolver: &AliasResolver, tokens: &[S], theme: Theme) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|token| resolver.canonicalize(token.as_ref()))
        .map(|name| {
            if resolver.is_themed(name) {
                theme.apply(name)
            } else {
                name.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::alias::AliasPolicy;
    use crate::catalogue::Catalogue;

    fn resolver() -> AliasResolver {
        let entries: BTreeMap<String, String> = [
            "javascript",
            "html",
            "react-dark",
            "react-light",
            "nextjs-dark",
            "nextjs-light",
        ]
        .iter()
        .map(|k| (k.to_string(), "<svg/>".to_string()))
        .collect();
        let catalogue = Catalogue::from_entries(entries).unwrap();
        AliasResolver::with_aliases(
            &catalogue,
            &[("js", "javascript"), ("next", "nextjs")],
            AliasPolicy::Strict,
        )
        .unwrap()
    }

    #[test]
    fn canonical_and_alias_tokens() {
        let r = resolver();
        assert_eq!(resolve(&r, &["javascript"], Theme::Dark), ["javascript"]);
        assert_eq!(resolve(&r, &["js"], Theme::Dark), ["javascript"]);
        assert_eq!(resolve(&r, &["react"], Theme::Light), ["react-light"]);
        assert_eq!(resolve(&r, &["next"], Theme::Dark), ["nextjs-dark"]);
    }

    #[test]
    fn unknown_tokens_are_dropped_in_order() {
        let r = resolver();
        let out = resolve(&r, &["nope", "html", "", "js", "react-dark", "JS"], Theme::Dark);
        assert_eq!(out, ["html", "javascript"]);
    }

    #[test]
    fn nothing_resolves() {
        let r = resolver();
        assert!(resolve(&r, &["not-a-real-icon"], Theme::Dark).is_empty());
        assert!(resolve::<&str>(&r, &[], Theme::Dark).is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let r = resolver();
        assert_eq!(resolve(&r, &["js", "javascript"], Theme::Dark), ["javascript", "javascript"]);
    }

    #[test]
    fn selection_all_is_literal() {
        assert_eq!(IconSelection::parse("all"), IconSelection::All);
        assert_eq!(
            IconSelection::parse("all,js"),
            IconSelection::Names(vec!["all".into(), "js".into()])
        );
        assert_eq!(
            IconSelection::parse("js,,html"),
            IconSelection::Names(vec!["js".into(), "".into(), "html".into()])
        );
    }

    #[test]
    fn selection_all_expands_to_canonical_names() {
        let r = resolver();
        let tokens = IconSelection::All.tokens(&r);
        assert_eq!(tokens, ["html", "javascript", "nextjs", "react"]);
        assert_eq!(resolve(&r, &tokens, Theme::Dark).len(), r.canonical_names().len());
    }
}
