//! Canonical names, themed names and the short-name alias table.
//!
//! Everything here is derived once from a [`Catalogue`] and is read-only
//! afterwards, so an [`AliasResolver`] can be shared across request threads
//! without locking.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::catalogue::Catalogue;
use crate::error::{CoreError, Result};
use crate::logging::targets;
use crate::theme::split_theme_suffix;

/// Curated short names and the canonical icon each one refers to.
pub const ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("tailwind", "tailwindcss"),
    ("vue", "vuejs"),
    ("nuxt", "nuxtjs"),
    ("go", "golang"),
    ("cf", "cloudflare"),
    ("wasm", "webassembly"),
    ("postgres", "postgresql"),
    ("k8s", "kubernetes"),
    ("next", "nextjs"),
    ("mongo", "mongodb"),
    ("md", "markdown"),
    ("ps", "photoshop"),
    ("ai", "illustrator"),
    ("pr", "premiere"),
    ("ae", "aftereffects"),
    ("scss", "sass"),
    ("sc", "scala"),
    ("net", "dotnet"),
    ("gatsbyjs", "gatsby"),
    ("gql", "graphql"),
    ("vlang", "v"),
    ("amazonwebservices", "aws"),
    ("bots", "discordbots"),
    ("express", "expressjs"),
    ("googlecloud", "gcp"),
    ("mui", "materialui"),
    ("windi", "windicss"),
    ("unreal", "unrealengine"),
    ("nest", "nestjs"),
    ("ktorio", "ktor"),
    ("pwsh", "powershell"),
    ("au", "audition"),
    ("rollup", "rollupjs"),
    ("rxjs", "reactivex"),
    ("rxjava", "reactivex"),
    ("ghactions", "githubactions"),
    ("sklearn", "scikitlearn"),
    ("claude", "claude_ai"),
    ("gpt", "chatgpt"),
];

/// What to do with aliases whose target is not in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AliasPolicy {
    /// Log each dangling alias and leave it out of the live table.
    #[default]
    Lenient,
    /// Refuse to build the resolver.
    Strict,
}

/// Name lookup tables derived from a catalogue.
#[derive(Debug, Clone)]
pub struct AliasResolver {
    /// Sorted, distinct base names.
    canonical: Vec<String>,
    canonical_set: HashSet<String>,
    /// Base names with at least one `-light`/`-dark` key.
    themed: HashSet<String>,
    /// Live alias table; only targets present in `canonical_set`.
    aliases: HashMap<&'static str, &'static str>,
    /// Aliases dropped because their target is missing.
    dangling: Vec<&'static str>,
}

impl AliasResolver {
    /// Build the resolver using the curated [`ALIASES`] table.
    pub fn new(catalogue: &Catalogue, policy: AliasPolicy) -> Result<Self> {
        Self::with_aliases(catalogue, ALIASES, policy)
    }

    /// Build the resolver with a custom alias table.
    pub fn with_aliases(
        catalogue: &Catalogue,
        table: &[(&'static str, &'static str)],
        policy: AliasPolicy,
    ) -> Result<Self> {
        let mut names = BTreeSet::new();
        let mut themed = HashSet::new();
        for key in catalogue.keys() {
            let (base, theme) = split_theme_suffix(key);
            names.insert(base.to_string());
            if theme.is_some() {
                themed.insert(base.to_string());
            }
        }

        let canonical: Vec<String> = names.into_iter().collect();
        let canonical_set: HashSet<String> = canonical.iter().cloned().collect();

        let mut aliases = HashMap::with_capacity(table.len());
        let mut dangling = Vec::new();
        for &(short, target) in table {
            if canonical_set.contains(target) {
                aliases.insert(short, target);
            } else {
                dangling.push(short);
            }
        }

        if !dangling.is_empty() {
            if policy == AliasPolicy::Strict {
                return Err(CoreError::DanglingAliases(
                    dangling.iter().map(|s| s.to_string()).collect(),
                ));
            }
            for short in &dangling {
                tracing::warn!(
                    target: targets::ALIAS,
                    alias = *short,
                    "Alias target is not in the catalogue; alias disabled"
                );
            }
        }

        tracing::debug!(
            target: targets::ALIAS,
            canonical = canonical.len(),
            themed = themed.len(),
            aliases = aliases.len(),
            "Built alias resolver"
        );

        Ok(Self {
            canonical,
            canonical_set,
            themed,
            aliases,
            dangling,
        })
    }

    /// All canonical names, sorted, each exactly once.
    pub fn canonical_names(&self) -> &[String] {
        &self.canonical
    }

    /// Check whether a name is canonical.
    pub fn is_canonical(&self, name: &str) -> bool {
        self.canonical_set.contains(name)
    }

    /// Check whether a canonical name has light/dark variants.
    pub fn is_themed(&self, name: &str) -> bool {
        self.themed.contains(name)
    }

    /// Look up the canonical target of a short name.
    pub fn alias_target(&self, short: &str) -> Option<&'static str> {
        self.aliases.get(short).copied()
    }

    /// Iterate over the live alias table.
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.aliases.iter().map(|(short, target)| (*short, *target))
    }

    /// Aliases that were disabled because their target is missing.
    pub fn dangling_aliases(&self) -> &[&'static str] {
        &self.dangling
    }

    /// Map a token to its canonical name, trying canonical names first.
    pub fn canonicalize<'a>(&'a self, token: &'a str) -> Option<&'a str> {
        if self.is_canonical(token) {
            Some(token)
        } else {
            self.alias_target(token)
        }
    }
}
