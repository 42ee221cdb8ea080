//! Light/dark icon variants.

use std::fmt;
use std::str::FromStr;

/// Color theme used to pick between themed icon variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light background variant.
    Light,
    /// Dark background variant.
    #[default]
    Dark,
}

impl Theme {
    /// Both themes, in suffix-matching order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The string used in query parameters and catalogue key suffixes.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Append this theme's suffix to a base name (`react` -> `react-dark`).
    pub fn apply(self, base: &str) -> String {
        format!("{base}-{}", self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing anything other than `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}'")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Split a catalogue key into its base name and optional theme suffix.
///
/// Only a trailing `-light` or `-dark` counts as a suffix, so names that
/// contain other dashes keep them.
pub fn split_theme_suffix(key: &str) -> (&str, Option<Theme>) {
    for theme in Theme::ALL {
        if let Some(base) = key
            .strip_suffix(theme.as_str())
            .and_then(|rest| rest.strip_suffix('-'))
        {
            if !base.is_empty() {
                return (base, Some(theme));
            }
        }
    }
    (key, None)
}
