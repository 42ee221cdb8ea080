//! Validation of raw icon request parameters.
//!
//! Checks run in a fixed order and the first failure wins: icon list, then
//! theme, then icons per line. Empty theme and per-line values fall back to
//! their defaults.

use crate::normalize::IconSelection;
use crate::theme::Theme;

/// Icons per row when the request does not say.
pub const DEFAULT_PER_LINE: usize = 15;
/// Smallest accepted icons-per-row value.
pub const MIN_PER_LINE: usize = 1;
/// Largest accepted icons-per-row value.
pub const MAX_PER_LINE: usize = 50;

/// Client errors for icon requests.
///
/// The display strings are returned verbatim as response bodies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// No icon list, or an empty one.
    #[error("You didn't specify any icons!")]
    MissingIcons,
    /// Theme other than `light` or `dark`.
    #[error("Theme must be either \"light\" or \"dark\"")]
    InvalidTheme,
    /// Per-line value that is not an integer in range.
    #[error("Icons per line must be a number between 1 and 50")]
    InvalidPerLine,
    /// None of the requested icons exist.
    #[error("You didn't format the icons param correctly!")]
    Unresolvable,
}

/// A validated icon request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Requested icons.
    pub selection: IconSelection,
    /// Variant for themed icons.
    pub theme: Theme,
    /// Icons per row, within `MIN_PER_LINE..=MAX_PER_LINE`.
    pub per_line: usize,
}

impl RequestSpec {
    /// Create a request for explicit names with default theme and width.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selection: IconSelection::Names(names.into_iter().map(Into::into).collect()),
            theme: Theme::default(),
            per_line: DEFAULT_PER_LINE,
        }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set icons per row.
    pub fn per_line(mut self, per_line: usize) -> Self {
        self.per_line = per_line;
        self
    }

    /// Validate raw query values.
    pub fn from_params(
        icons: Option<&str>,
        theme: Option<&str>,
        per_line: Option<&str>,
    ) -> Result<Self, RequestError> {
        let icons = icons
            .filter(|s| !s.is_empty())
            .ok_or(RequestError::MissingIcons)?;

        let theme = match theme.filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| RequestError::InvalidTheme)?,
            None => Theme::default(),
        };

        let per_line = match per_line.filter(|s| !s.is_empty()) {
            Some(raw) => parse_per_line(raw)?,
            None => DEFAULT_PER_LINE,
        };

        Ok(Self {
            selection: IconSelection::parse(icons),
            theme,
            per_line,
        })
    }
}

fn parse_per_line(raw: &str) -> Result<usize, RequestError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (MIN_PER_LINE..=MAX_PER_LINE).contains(n))
        .ok_or(RequestError::InvalidPerLine)
}
