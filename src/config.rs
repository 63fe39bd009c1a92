use crate::error::Result;
use crate::i18n::LanguageRegistry;
use crate::page::AttributeScheme;
use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Page contract
    pub control_id: String,
    pub attribute_prefix: String,
    pub placeholder_suffix: String,
    /// Language whose attributes mark an element as translatable
    pub base_language: String,

    // Languages
    pub default_language: String,
    pub languages: Vec<String>,
    /// Configured languages skipped by page audits
    pub disabled_languages: Vec<String>,

    // Persistence
    pub storage_key: String,
    pub store_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            control_id: "languageSwitcher".to_string(),
            attribute_prefix: AttributeScheme::DEFAULT_PREFIX.to_string(),
            placeholder_suffix: AttributeScheme::DEFAULT_PLACEHOLDER_SUFFIX.to_string(),
            base_language: "en".to_string(),
            default_language: "en".to_string(),
            languages: vec!["en".to_string()],
            disabled_languages: Vec::new(),
            storage_key: "lang".to_string(),
            store_path: "data/preferences.json".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `LOCALIZER_*` environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let config = Self {
            control_id: env_or("LOCALIZER_CONTROL_ID", defaults.control_id),
            attribute_prefix: env_or("LOCALIZER_ATTRIBUTE_PREFIX", defaults.attribute_prefix),
            placeholder_suffix: env_or(
                "LOCALIZER_PLACEHOLDER_SUFFIX",
                defaults.placeholder_suffix,
            ),
            base_language: env_or("LOCALIZER_BASE_LANGUAGE", defaults.base_language),
            default_language: env_or("LOCALIZER_DEFAULT_LANGUAGE", defaults.default_language),
            languages: env_list("LOCALIZER_LANGUAGES").unwrap_or(defaults.languages),
            disabled_languages: env_list("LOCALIZER_DISABLED_LANGUAGES")
                .unwrap_or(defaults.disabled_languages),
            storage_key: env_or("LOCALIZER_STORAGE_KEY", defaults.storage_key),
            store_path: env_or("LOCALIZER_STORE_PATH", defaults.store_path),
        };

        config
            .registry()
            .context("LOCALIZER_*LANGUAGES / LOCALIZER_DEFAULT_LANGUAGE are inconsistent")?;

        Ok(config)
    }

    /// Build the language registry described by this configuration.
    pub fn registry(&self) -> Result<LanguageRegistry> {
        let mut registry = LanguageRegistry::new(&self.languages, &self.default_language)?;
        for code in &self.disabled_languages {
            registry.disable(code)?;
        }
        Ok(registry)
    }

    /// Attribute naming scheme for translatable elements.
    pub fn scheme(&self) -> AttributeScheme {
        AttributeScheme::new(&self.attribute_prefix, &self.placeholder_suffix)
    }
}

/// Comma-separated list, blanks dropped. `None` when the variable is unset.
fn env_list(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|v| {
        v.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}
