//! Page model and translation records.

mod document;
mod record;

pub use document::{Document, Element, Selector};
pub use record::{AttributeScheme, TranslationRecord, VariantKind};
