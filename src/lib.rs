//! Page localization: swap element text and placeholders between language
//! variants stored in `data-<lang>` attributes, persist the chosen language,
//! and notify listeners when it changes.

pub mod config;
pub mod error;
pub mod events;
pub mod i18n;
pub mod page;
pub mod store;
pub mod switcher;

pub use config::Config;
pub use error::{LocalizerError, Result};
pub use events::{ChangeNotifier, LanguageChanged, SubscriptionId, LANGUAGE_CHANGED_EVENT};
pub use i18n::LanguageCode;
pub use page::{Document, Element};
pub use store::{JsonFileStore, MemoryStore, PreferenceStore};
pub use switcher::{ApplyOutcome, LanguageSwitcher};
