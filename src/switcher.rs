//! The language switcher: applies a language to a page, persists it, and
//! notifies listeners when the user picks another one.
//!
//! Every apply re-queries the document. No element list is kept between
//! calls, so elements added after initialization are picked up by the next
//! switch.

use crate::config::Config;
use crate::events::{ChangeNotifier, LanguageChanged, SubscriptionId};
use crate::i18n::{LanguageCode, PageValidator, SwitchMetrics};
use crate::page::{AttributeScheme, Document, Selector, TranslationRecord, VariantKind};
use crate::store::PreferenceStore;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Summary of one apply pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyOutcome {
    pub language: LanguageCode,

    /// Text writes, buttons counted once per pass that touched them
    pub texts_updated: usize,

    pub placeholders_updated: usize,

    /// Writes that found no variant and cleared the field
    pub missing_variants: usize,

    /// Whether the preference store accepted the write
    pub persisted: bool,
}

impl ApplyOutcome {
    fn new(language: LanguageCode) -> Self {
        Self {
            language,
            texts_updated: 0,
            placeholders_updated: 0,
            missing_variants: 0,
            persisted: false,
        }
    }
}

/// Page language switcher bound to one selector control.
pub struct LanguageSwitcher<S: PreferenceStore> {
    control_id: String,
    storage_key: String,
    base_language: LanguageCode,
    scheme: AttributeScheme,
    store: S,
    notifier: ChangeNotifier,
    metrics: SwitchMetrics,
    current: LanguageCode,
}

impl<S: PreferenceStore> LanguageSwitcher<S> {
    /// Initialize the switcher against a ready document.
    ///
    /// Returns `None` without touching the document or the store when the
    /// selector control is missing. Otherwise restores the persisted language
    /// (or the configured default), writes it into the control and applies it.
    /// No change notification is emitted at startup.
    pub fn init(config: &Config, store: S, document: &mut Document) -> Option<Self> {
        if document.get_by_id(&config.control_id).is_none() {
            debug!(
                "Language control '#{}' not found, switcher disabled",
                config.control_id
            );
            return None;
        }

        let scheme = config.scheme();
        audit_page(config, &scheme, document);

        let default = LanguageCode::new(config.default_language.as_str());
        let saved = match store.get(&config.storage_key) {
            Ok(Some(value)) if !value.is_empty() => LanguageCode::new(value),
            Ok(_) => default,
            Err(e) => {
                warn!("Failed to read language preference, using default: {}", e);
                default
            }
        };

        let mut switcher = Self {
            control_id: config.control_id.clone(),
            storage_key: config.storage_key.clone(),
            base_language: LanguageCode::new(config.base_language.as_str()),
            scheme,
            store,
            notifier: ChangeNotifier::new(),
            metrics: SwitchMetrics::new(),
            current: saved.clone(),
        };

        if let Some(control) = document.get_by_id_mut(&switcher.control_id) {
            control.value = Some(saved.to_string());
        }
        switcher.apply(document, &saved);

        info!("Language switcher initialized with '{}'", saved);
        Some(switcher)
    }

    /// Show `language` on every translatable element and persist it.
    ///
    /// Elements lacking a variant for `language` get `None`. A store failure is
    /// logged and reported in the outcome; it never aborts the pass.
    pub fn apply(&mut self, document: &mut Document, language: &LanguageCode) -> ApplyOutcome {
        let base = self.base_language.as_str();
        let mut outcome = ApplyOutcome::new(language.clone());
        self.metrics.record_apply();

        let text = self.scheme.text_selector(base);
        self.translate(document, &text, VariantKind::Text, &mut outcome);

        let placeholder = self.scheme.placeholder_selector(base);
        self.translate(document, &placeholder, VariantKind::Placeholder, &mut outcome);

        // Buttons were already covered by the text pass; rewriting them is a no-op.
        let buttons = self.scheme.button_selector(base);
        self.translate(document, &buttons, VariantKind::Text, &mut outcome);

        match self.store.set(&self.storage_key, language.as_str()) {
            Ok(()) => outcome.persisted = true,
            Err(e) => {
                self.metrics.record_store_failure();
                warn!("Failed to persist language '{}': {}", language, e);
            }
        }

        self.current = language.clone();
        debug!(
            "Applied '{}': {} texts, {} placeholders, {} missing",
            language, outcome.texts_updated, outcome.placeholders_updated, outcome.missing_variants
        );
        outcome
    }

    fn translate(
        &self,
        document: &mut Document,
        selector: &Selector,
        kind: VariantKind,
        outcome: &mut ApplyOutcome,
    ) {
        for element in document.query_mut(selector) {
            let record = TranslationRecord::from_element(element, &self.scheme);
            let variant = record.variant(kind, &outcome.language).map(str::to_owned);

            if variant.is_none() {
                outcome.missing_variants += 1;
                self.metrics.record_missing_variant();
            }

            match kind {
                VariantKind::Text => {
                    element.text = variant;
                    outcome.texts_updated += 1;
                    self.metrics.record_text_update();
                }
                VariantKind::Placeholder => {
                    element.placeholder = variant;
                    outcome.placeholders_updated += 1;
                    self.metrics.record_placeholder_update();
                }
            }
        }
    }

    /// React to a user change on the control: apply its current value and
    /// notify listeners once.
    ///
    /// Returns the emitted event, or `None` if the control is gone or has no
    /// value.
    pub fn handle_change(&mut self, document: &mut Document) -> Option<LanguageChanged> {
        let Some(value) = document
            .get_by_id(&self.control_id)
            .and_then(|control| control.value.clone())
        else {
            debug!("Language control '#{}' has no value, ignoring change", self.control_id);
            return None;
        };

        let language = LanguageCode::new(value);
        let previous = self.current.clone();
        self.apply(document, &language);

        let event = LanguageChanged::new(language, Some(previous));
        let delivered = self.notifier.emit(&event);
        self.metrics.record_notification();

        info!("Language changed to '{}' ({} listeners)", event.language, delivered);
        Some(event)
    }

    /// Select `language` on the control as a user would, then handle the change.
    pub fn select(
        &mut self,
        document: &mut Document,
        language: impl Into<LanguageCode>,
    ) -> Option<LanguageChanged> {
        let control = document.get_by_id_mut(&self.control_id)?;
        control.value = Some(language.into().to_string());
        self.handle_change(document)
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&LanguageChanged) + Send + Sync + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// The language most recently applied.
    pub fn current(&self) -> &LanguageCode {
        &self.current
    }

    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn metrics(&self) -> &SwitchMetrics {
        &self.metrics
    }
}

/// Log coverage gaps against the configured registry.
fn audit_page(config: &Config, scheme: &AttributeScheme, document: &Document) {
    let registry = match config.registry() {
        Ok(registry) => registry,
        Err(e) => {
            warn!("Skipping page audit, language configuration is invalid: {}", e);
            return;
        }
    };

    let report = PageValidator::new(&registry, scheme, &config.base_language)
        .validate(document, &config.control_id);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LocalizerError, Result};
    use crate::page::Element;
    use crate::store::MemoryStore;

    fn page() -> Document {
        Document::new(vec![
            Element::new("select").with_id("languageSwitcher"),
            Element::new("h1")
                .with_attribute("data-en", "Welcome")
                .with_attribute("data-fr", "Bienvenue"),
            Element::new("button")
                .with_attribute("data-en", "Scan")
                .with_attribute("data-fr", "Analyser"),
            Element::new("input")
                .with_attribute("data-en-placeholder", "Baby name")
                .with_attribute("data-fr-placeholder", "Nom du bébé"),
        ])
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(Some("fr".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(LocalizerError::Store("read-only".to_string()))
        }
    }

    // ==================== Init Tests ====================

    #[test]
    fn test_init_defaults_to_english() {
        let mut doc = page();
        let switcher = LanguageSwitcher::init(&Config::default(), MemoryStore::new(), &mut doc)
            .expect("control present");

        assert_eq!(switcher.current().as_str(), "en");
        assert_eq!(doc.elements[0].value.as_deref(), Some("en"));
        assert_eq!(doc.elements[1].text.as_deref(), Some("Welcome"));
        assert_eq!(doc.elements[3].placeholder.as_deref(), Some("Baby name"));
        assert_eq!(switcher.store().get("lang").unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_init_empty_preference_uses_default() {
        let mut doc = page();
        let store = MemoryStore::with_entry("lang", "");
        let switcher = LanguageSwitcher::init(&Config::default(), store, &mut doc).unwrap();
        assert_eq!(switcher.current().as_str(), "en");
    }

    #[test]
    fn test_init_uses_configured_default() {
        let config = Config {
            default_language: "fr".to_string(),
            languages: vec!["en".to_string(), "fr".to_string()],
            ..Config::default()
        };
        let mut doc = page();
        let switcher = LanguageSwitcher::init(&config, MemoryStore::new(), &mut doc).unwrap();

        assert_eq!(switcher.current().as_str(), "fr");
        assert_eq!(doc.elements[2].text.as_deref(), Some("Analyser"));
    }

    #[test]
    fn test_init_without_control_is_noop() {
        let mut doc = page();
        doc.elements.remove(0);
        let before = doc.clone();

        let switcher = LanguageSwitcher::init(&Config::default(), MemoryStore::new(), &mut doc);
        assert!(switcher.is_none());
        assert_eq!(doc, before);
    }

    // ==================== Apply Tests ====================

    #[test]
    fn test_apply_counts_button_pass() {
        let mut doc = page();
        let mut switcher =
            LanguageSwitcher::init(&Config::default(), MemoryStore::new(), &mut doc).unwrap();

        let outcome = switcher.apply(&mut doc, &LanguageCode::new("fr"));
        // h1 + button in the text pass, button again in the button pass
        assert_eq!(outcome.texts_updated, 3);
        assert_eq!(outcome.placeholders_updated, 1);
        assert_eq!(outcome.missing_variants, 0);
        assert!(outcome.persisted);
    }

    #[test]
    fn test_apply_unknown_language_clears_fields() {
        let mut doc = page();
        let mut switcher =
            LanguageSwitcher::init(&Config::default(), MemoryStore::new(), &mut doc).unwrap();

        let outcome = switcher.apply(&mut doc, &LanguageCode::new("sw"));
        assert_eq!(doc.elements[1].text, None);
        assert_eq!(doc.elements[3].placeholder, None);
        assert_eq!(outcome.missing_variants, 4);
        assert_eq!(switcher.metrics().missing_variants(), 4);
    }

    #[test]
    fn test_apply_store_failure_is_not_fatal() {
        let mut doc = page();
        let mut switcher =
            LanguageSwitcher::init(&Config::default(), ReadOnlyStore, &mut doc).unwrap();

        assert_eq!(doc.elements[1].text.as_deref(), Some("Bienvenue"));
        let outcome = switcher.apply(&mut doc, &LanguageCode::new("en"));
        assert!(!outcome.persisted);
        assert_eq!(doc.elements[1].text.as_deref(), Some("Welcome"));
        assert_eq!(switcher.metrics().store_failures(), 2);
    }

    // ==================== Change Tests ====================

    #[test]
    fn test_select_emits_event_with_previous() {
        let mut doc = page();
        let mut switcher =
            LanguageSwitcher::init(&Config::default(), MemoryStore::new(), &mut doc).unwrap();

        let event = switcher.select(&mut doc, "fr").unwrap();
        assert_eq!(event.language.as_str(), "fr");
        assert_eq!(event.previous.as_ref().map(|c| c.as_str()), Some("en"));
        assert_eq!(switcher.metrics().notifications(), 1);
    }

    #[test]
    fn test_handle_change_without_value_is_ignored() {
        let mut doc = page();
        let mut switcher =
            LanguageSwitcher::init(&Config::default(), MemoryStore::new(), &mut doc).unwrap();
        doc.elements[0].value = None;

        assert!(switcher.handle_change(&mut doc).is_none());
        assert_eq!(switcher.metrics().notifications(), 0);
        assert_eq!(switcher.metrics().applies(), 1);
    }

    #[test]
    fn test_select_after_control_removed() {
        let mut doc = page();
        let mut switcher =
            LanguageSwitcher::init(&Config::default(), MemoryStore::new(), &mut doc).unwrap();
        doc.elements.remove(0);

        assert!(switcher.select(&mut doc, "fr").is_none());
        assert_eq!(switcher.current().as_str(), "en");
    }
}
