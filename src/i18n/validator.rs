//! Page coverage validation.
//!
//! Checks a page against the configured registry before it is localized:
//! the selector control must exist, and every translatable element should
//! carry a variant for every enabled language.

use crate::i18n::LanguageRegistry;
use crate::page::{AttributeScheme, Document, TranslationRecord};
use serde::Serialize;

/// Outcome of a page audit.
///
/// `errors` stop the switcher from running at all (no control). `warnings`
/// are coverage gaps that clear a field when the language is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// No errors and no coverage gaps.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validator for page language coverage.
pub struct PageValidator<'a> {
    registry: &'a LanguageRegistry,
    scheme: &'a AttributeScheme,
    base_language: &'a str,
}

impl<'a> PageValidator<'a> {
    /// Create a validator.
    ///
    /// # Arguments
    /// * `registry` - Languages to audit; disabled entries are skipped
    /// * `scheme` - How variants are named in attributes
    /// * `base_language` - Language whose attributes mark an element as translatable
    pub fn new(
        registry: &'a LanguageRegistry,
        scheme: &'a AttributeScheme,
        base_language: &'a str,
    ) -> Self {
        Self {
            registry,
            scheme,
            base_language,
        }
    }

    /// Validate a page.
    ///
    /// # Arguments
    /// * `document` - The page to check
    /// * `control_id` - Id of the language selector control
    ///
    /// # Returns
    /// An error when the control is missing, and one warning per missing
    /// variant of an enabled language.
    pub fn validate(&self, document: &Document, control_id: &str) -> ValidationReport {
        let mut report = ValidationReport::default();

        if document.get_by_id(control_id).is_none() {
            report.error(format!("Language control '#{}' not found", control_id));
        }

        let text_attr = self.scheme.text_attribute(self.base_language);
        let placeholder_attr = self.scheme.placeholder_attribute(self.base_language);

        for element in &document.elements {
            let has_text = element.has_attribute(&text_attr);
            let has_placeholder = element.has_attribute(&placeholder_attr);
            if !has_text && !has_placeholder {
                continue;
            }

            let record = TranslationRecord::from_element(element, self.scheme);
            for code in self.registry.enabled_codes() {
                if has_text && record.text(code).is_none() {
                    report.warn(format!(
                        "{} is missing {}",
                        element.label(),
                        self.scheme.text_attribute(code.as_str())
                    ));
                }
                if has_placeholder && record.placeholder(code).is_none() {
                    report.warn(format!(
                        "{} is missing {}",
                        element.label(),
                        self.scheme.placeholder_attribute(code.as_str())
                    ));
                }
            }
        }

        report
    }
}
