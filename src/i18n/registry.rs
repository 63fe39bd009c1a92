//! Language registry: the languages a page is expected to carry.
//!
//! The registry is built once from configuration and validated up front, so
//! malformed or duplicated codes are rejected before any page is touched. It
//! does not restrict which codes can be applied; it drives page audits and
//! display names.

use crate::error::{LocalizerError, Result};
use crate::i18n::LanguageCode;
use regex::Regex;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Language code as it appears in attribute names (e.g., "en", "fr")
    pub code: LanguageCode,

    /// English name of the language (e.g., "French")
    pub name: String,

    /// Native name of the language (e.g., "Français")
    pub native_name: String,

    /// Whether this is the language used when nothing is persisted
    pub is_default: bool,

    /// Whether pages are audited for this language
    pub enabled: bool,
}

/// Registry of configured languages.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static CODE_REGEX: OnceLock<Regex> = OnceLock::new();

impl LanguageRegistry {
    /// Build a registry from a list of codes and the default code.
    ///
    /// # Errors
    /// * `NoLanguages` if `codes` is empty
    /// * `InvalidLanguageCode` if a code is not a lowercase language tag
    /// * `DuplicateLanguage` if a code appears twice
    /// * `DefaultNotSupported` if `default` is not among `codes`
    pub fn new<S: AsRef<str>>(codes: &[S], default: &str) -> Result<Self> {
        if codes.is_empty() {
            return Err(LocalizerError::NoLanguages);
        }

        let mut languages: Vec<LanguageConfig> = Vec::with_capacity(codes.len());
        for code in codes {
            let code = code.as_ref().trim();
            if !is_well_formed(code) {
                return Err(LocalizerError::InvalidLanguageCode(code.to_string()));
            }
            if languages.iter().any(|lang| lang.code.as_str() == code) {
                return Err(LocalizerError::DuplicateLanguage(code.to_string()));
            }

            let (name, native_name) = match known_names(code) {
                Some((name, native_name)) => (name.to_string(), native_name.to_string()),
                None => (code.to_string(), code.to_string()),
            };
            languages.push(LanguageConfig {
                code: LanguageCode::new(code),
                name,
                native_name,
                is_default: code == default,
                enabled: true,
            });
        }

        if !languages.iter().any(|lang| lang.is_default) {
            return Err(LocalizerError::DefaultNotSupported(default.to_string()));
        }

        Ok(Self { languages })
    }

    /// Disable a configured language.
    ///
    /// A disabled language stays known to the registry but is skipped by page
    /// audits. The default language cannot be disabled.
    ///
    /// # Errors
    /// * `UnknownLanguage` if `code` is not configured
    /// * `DefaultDisabled` if `code` is the default language
    pub fn disable(&mut self, code: &str) -> Result<()> {
        let code = code.trim();
        let lang = self
            .languages
            .iter_mut()
            .find(|lang| lang.code.as_str() == code)
            .ok_or_else(|| LocalizerError::UnknownLanguage(code.to_string()))?;

        if lang.is_default {
            return Err(LocalizerError::DefaultDisabled(code.to_string()));
        }
        lang.enabled = false;
        Ok(())
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code.as_str() == code)
    }

    /// All configured languages, in configuration order.
    pub fn languages(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Iterate over the configured codes.
    pub fn codes(&self) -> impl Iterator<Item = &LanguageCode> {
        self.languages.iter().map(|lang| &lang.code)
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Iterate over the codes of enabled languages.
    pub fn enabled_codes(&self) -> impl Iterator<Item = &LanguageCode> {
        self.languages
            .iter()
            .filter(|lang| lang.enabled)
            .map(|lang| &lang.code)
    }

    /// The default language configuration.
    ///
    /// Construction guarantees exactly one entry is marked default.
    pub fn default_language(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_default)
            .unwrap_or(&self.languages[0])
    }

    /// Check if a language code is configured.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Check if a language code is configured and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Whether `code` looks like a lowercase language tag ("en", "pt-BR", "zh-Hans").
fn is_well_formed(code: &str) -> bool {
    let regex = CODE_REGEX
        .get_or_init(|| Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());
    regex.is_match(code)
}

/// English and native names for common codes.
fn known_names(code: &str) -> Option<(&'static str, &'static str)> {
    let names = match code {
        "en" => ("English", "English"),
        "fr" => ("French", "Français"),
        "de" => ("German", "Deutsch"),
        "es" => ("Spanish", "Español"),
        "it" => ("Italian", "Italiano"),
        "pt" => ("Portuguese", "Português"),
        "nl" => ("Dutch", "Nederlands"),
        "ar" => ("Arabic", "العربية"),
        "tr" => ("Turkish", "Türkçe"),
        "ru" => ("Russian", "Русский"),
        "zh-CN" => ("Simplified Chinese", "简体中文"),
        "ja" => ("Japanese", "日本語"),
        _ => return None,
    };
    Some(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LanguageRegistry {
        LanguageRegistry::new(&["en", "fr", "de"], "en").expect("valid registry")
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_keeps_configuration_order() {
        let registry = registry();
        let codes: Vec<&str> = registry.codes().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["en", "fr", "de"]);
    }

    #[test]
    fn test_new_rejects_empty_list() {
        let codes: [&str; 0] = [];
        let result = LanguageRegistry::new(&codes, "en");
        assert!(matches!(result, Err(LocalizerError::NoLanguages)));
    }

    #[test]
    fn test_new_rejects_malformed_code() {
        let result = LanguageRegistry::new(&["en", "French"], "en");
        assert!(matches!(result, Err(LocalizerError::InvalidLanguageCode(c)) if c == "French"));
    }

    #[test]
    fn test_new_rejects_empty_code() {
        let result = LanguageRegistry::new(&["en", ""], "en");
        assert!(matches!(result, Err(LocalizerError::InvalidLanguageCode(_))));
    }

    #[test]
    fn test_new_rejects_duplicate() {
        let result = LanguageRegistry::new(&["en", "fr", "en"], "en");
        assert!(matches!(result, Err(LocalizerError::DuplicateLanguage(c)) if c == "en"));
    }

    #[test]
    fn test_new_rejects_unknown_default() {
        let result = LanguageRegistry::new(&["fr", "de"], "en");
        assert!(matches!(result, Err(LocalizerError::DefaultNotSupported(c)) if c == "en"));
    }

    #[test]
    fn test_new_trims_whitespace() {
        let registry = LanguageRegistry::new(&[" en", "fr "], "en").unwrap();
        assert!(registry.is_supported("fr"));
    }

    #[test]
    fn test_new_accepts_region_subtag() {
        let registry = LanguageRegistry::new(&["en", "zh-CN"], "en").unwrap();
        let chinese = registry.get_by_code("zh-CN").unwrap();
        assert_eq!(chinese.native_name, "简体中文");
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_by_code_known_names() {
        let registry = registry();
        let french = registry.get_by_code("fr").unwrap();
        assert_eq!(french.name, "French");
        assert_eq!(french.native_name, "Français");
        assert!(!french.is_default);
    }

    #[test]
    fn test_unknown_code_falls_back_to_code_as_name() {
        let registry = LanguageRegistry::new(&["en", "xh"], "en").unwrap();
        let xhosa = registry.get_by_code("xh").unwrap();
        assert_eq!(xhosa.name, "xh");
        assert_eq!(xhosa.native_name, "xh");
    }

    #[test]
    fn test_default_language() {
        let registry = LanguageRegistry::new(&["fr", "en"], "en").unwrap();
        assert_eq!(registry.default_language().code.as_str(), "en");
    }

    // ==================== Enabled Tests ====================

    #[test]
    fn test_languages_start_enabled() {
        let registry = registry();
        assert_eq!(registry.list_enabled().len(), 3);
        assert!(registry.languages().iter().all(|lang| lang.enabled));
    }

    #[test]
    fn test_disable_keeps_language_known() {
        let mut registry = registry();
        registry.disable("de").unwrap();

        assert!(registry.is_supported("de"));
        assert!(!registry.is_enabled("de"));
        assert!(registry.is_enabled("fr"));

        let enabled: Vec<&str> = registry.enabled_codes().map(|c| c.as_str()).collect();
        assert_eq!(enabled, vec!["en", "fr"]);
    }

    #[test]
    fn test_disable_unknown_language() {
        let mut registry = registry();
        let result = registry.disable("es");
        assert!(matches!(result, Err(LocalizerError::UnknownLanguage(c)) if c == "es"));
    }

    #[test]
    fn test_disable_default_language_is_rejected() {
        let mut registry = registry();
        let result = registry.disable("en");
        assert!(matches!(result, Err(LocalizerError::DefaultDisabled(c)) if c == "en"));
        assert!(registry.is_enabled("en"));
    }

    #[test]
    fn test_is_supported() {
        let registry = registry();
        assert!(registry.is_supported("de"));
        assert!(!registry.is_supported("es"));
    }
}
