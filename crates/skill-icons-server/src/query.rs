//! Query string access for the `/icons` endpoint.

use skill_icons_core::RequestSpec;
use skill_icons_core::request::RequestError;

/// Decoded query pairs, in the order they appeared.
///
/// Lookups return the first occurrence of a key. Short parameter names
/// (`i`, `t`) take precedence over long ones when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconQuery {
    pairs: Vec<(String, String)>,
}

impl IconQuery {
    /// Wrap decoded pairs.
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn get_either(&self, short: &str, long: &str) -> Option<&str> {
        self.get(short)
            .filter(|v| !v.is_empty())
            .or_else(|| self.get(long))
    }

    /// The icon list (`i` or `icons`).
    pub fn icons(&self) -> Option<&str> {
        self.get_either("i", "icons")
    }

    /// The theme (`t` or `theme`).
    pub fn theme(&self) -> Option<&str> {
        self.get_either("t", "theme")
    }

    /// Icons per line (`perline`).
    pub fn per_line(&self) -> Option<&str> {
        self.get("perline")
    }

    /// Validate into a request.
    pub fn to_spec(&self) -> Result<RequestSpec, RequestError> {
        RequestSpec::from_params(self.icons(), self.theme(), self.per_line())
    }
}
