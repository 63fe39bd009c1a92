//! Language handling shared by the switcher, the validator and the binaries.
//!
//! # Architecture
//!
//! - `language`: `LanguageCode`, the unvalidated code applied to pages
//! - `registry`: configured languages, validated when configuration is loaded
//! - `validator`: page coverage audit against the registry
//! - `metrics`: per-switcher counters
//!
//! # Example
//!
//! ```rust,ignore
//! use page_localizer::i18n::{LanguageRegistry, PageValidator};
//!
//! let registry = LanguageRegistry::new(&["en", "fr"], "en")?;
//! let report = PageValidator::new(&registry, &scheme, "en").validate(&doc, "languageSwitcher");
//! ```

mod language;
mod metrics;
mod registry;
mod validator;

pub use language::LanguageCode;
pub use metrics::{MetricsReport, SwitchMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{PageValidator, ValidationReport};
