//! Per-element translation records.
//!
//! Attribute names are decoded once into an explicit code → text mapping
//! instead of being assembled by string concatenation at lookup time.

use crate::i18n::LanguageCode;
use crate::page::{Element, Selector};
use std::collections::BTreeMap;

/// How language variants are encoded in attribute names.
///
/// With the defaults, `data-fr` holds French text and `data-fr-placeholder`
/// holds the French placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeScheme {
    pub prefix: String,
    pub placeholder_suffix: String,
}

impl AttributeScheme {
    pub const DEFAULT_PREFIX: &'static str = "data-";
    pub const DEFAULT_PLACEHOLDER_SUFFIX: &'static str = "-placeholder";

    pub fn new(prefix: impl Into<String>, placeholder_suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            placeholder_suffix: placeholder_suffix.into(),
        }
    }

    /// Attribute holding the text variant for `code`.
    pub fn text_attribute(&self, code: &str) -> String {
        format!("{}{}", self.prefix, code)
    }

    /// Attribute holding the placeholder variant for `code`.
    pub fn placeholder_attribute(&self, code: &str) -> String {
        format!("{}{}{}", self.prefix, code, self.placeholder_suffix)
    }

    /// Elements whose text is translatable, keyed on the base language.
    pub fn text_selector(&self, base: &str) -> Selector {
        Selector::has_attribute(self.text_attribute(base))
    }

    /// Elements whose placeholder is translatable, keyed on the base language.
    pub fn placeholder_selector(&self, base: &str) -> Selector {
        Selector::has_attribute(self.placeholder_attribute(base))
    }

    /// Buttons whose text is translatable.
    pub fn button_selector(&self, base: &str) -> Selector {
        Selector::tag_with_attribute("button", self.text_attribute(base))
    }
}

impl Default for AttributeScheme {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX, Self::DEFAULT_PLACEHOLDER_SUFFIX)
    }
}

/// Which element property a variant targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    Text,
    Placeholder,
}

/// Language variants carried by one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRecord {
    text: BTreeMap<LanguageCode, String>,
    placeholder: BTreeMap<LanguageCode, String>,
}

impl TranslationRecord {
    /// Decode every variant attribute on `element`.
    ///
    /// Attribute names are matched ASCII case-insensitively, as HTML does, and
    /// codes are stored lowercased. Attributes outside the scheme's prefix are
    /// ignored. An attribute that is exactly the prefix (empty code) is ignored too.
    pub fn from_element(element: &Element, scheme: &AttributeScheme) -> Self {
        let mut record = Self::default();
        let prefix = scheme.prefix.to_ascii_lowercase();
        let suffix = scheme.placeholder_suffix.to_ascii_lowercase();

        for (name, value) in &element.attributes {
            let name = name.to_ascii_lowercase();
            let Some(rest) = name.strip_prefix(prefix.as_str()) else {
                continue;
            };

            match rest.strip_suffix(suffix.as_str()) {
                Some(code) if !code.is_empty() => {
                    record.placeholder.insert(LanguageCode::new(code), value.clone());
                }
                Some(_) => {}
                None if !rest.is_empty() => {
                    record.text.insert(LanguageCode::new(rest), value.clone());
                }
                None => {}
            }
        }

        record
    }

    /// Text variant for `code`, if the element carries one.
    ///
    /// `code` is compared case-insensitively, so `zh-CN` finds `data-zh-cn`.
    pub fn text(&self, code: &LanguageCode) -> Option<&str> {
        self.text.get(&folded(code)).map(String::as_str)
    }

    /// Placeholder variant for `code`, if the element carries one.
    pub fn placeholder(&self, code: &LanguageCode) -> Option<&str> {
        self.placeholder.get(&folded(code)).map(String::as_str)
    }

    pub fn variant(&self, kind: VariantKind, code: &LanguageCode) -> Option<&str> {
        match kind {
            VariantKind::Text => self.text(code),
            VariantKind::Placeholder => self.placeholder(code),
        }
    }

    /// Codes with a text variant, lowercased.
    pub fn text_languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.text.keys()
    }

    /// Codes with a placeholder variant.
    pub fn placeholder_languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.placeholder.keys()
    }
}

fn folded(code: &LanguageCode) -> LanguageCode {
    LanguageCode::new(code.as_str().to_ascii_lowercase())
}
