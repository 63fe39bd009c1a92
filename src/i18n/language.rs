//! Language code: the identifier that selects an attribute variant.
//!
//! Unlike registry entries, a `LanguageCode` is not checked against any fixed
//! set. Any code can be applied to a page; codes without a matching attribute
//! simply resolve to nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language code such as `"en"` or `"fr"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Code used when no preference has been persisted.
    pub const DEFAULT: &'static str = "en";

    /// Create a code from any string. No format constraint is enforced.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The default language (`"en"`).
    pub fn default_language() -> Self {
        Self::new(Self::DEFAULT)
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::default_language()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
