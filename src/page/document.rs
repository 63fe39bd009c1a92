//! In-memory page model.
//!
//! A `Document` is a flat, ordered list of elements. Queries are evaluated on
//! every call; nothing is indexed or cached, so elements pushed after load are
//! visible to the next query.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single page element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Tag name (e.g., "p", "button", "input", "select")
    pub tag: String,

    /// Raw attributes, including `data-<lang>` variants
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Visible text content. `None` renders as empty.
    #[serde(default)]
    pub text: Option<String>,

    /// Placeholder text for input-like elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Current value for selectable controls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Element {
    /// Create an element with the given tag and nothing else.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the visible text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the control value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Read an attribute value. Names compare ASCII case-insensitively.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.attributes.get(name) {
            return Some(value);
        }
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Short label for logs and reports: `#id` when present, otherwise the tag.
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => format!("{}#{}", self.tag, id),
            None => self.tag.clone(),
        }
    }
}

/// Element filter, the subset of selector syntax the localizer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `[attr]`
    HasAttribute(String),
    /// `tag[attr]`
    TagWithAttribute { tag: String, attribute: String },
}

impl Selector {
    pub fn has_attribute(attribute: impl Into<String>) -> Self {
        Self::HasAttribute(attribute.into())
    }

    pub fn tag_with_attribute(tag: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::TagWithAttribute {
            tag: tag.into(),
            attribute: attribute.into(),
        }
    }

    /// Whether `element` satisfies this selector. Tag and attribute names
    /// compare ASCII case-insensitively.
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::HasAttribute(attribute) => element.has_attribute(attribute),
            Self::TagWithAttribute { tag, attribute } => {
                element.tag.eq_ignore_ascii_case(tag) && element.has_attribute(attribute)
            }
        }
    }
}

/// A page: an ordered list of elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Parse a document from its JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the document as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Append an element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Find the first element with the given id.
    pub fn get_by_id(&self, id: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|el| el.id.as_deref() == Some(id))
    }

    /// Mutable variant of [`Document::get_by_id`].
    pub fn get_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .find(|el| el.id.as_deref() == Some(id))
    }

    /// All elements matching the selector, in document order.
    pub fn query<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements.iter().filter(move |el| selector.matches(el))
    }

    /// Mutable variant of [`Document::query`].
    pub fn query_mut<'a>(
        &'a mut self,
        selector: &'a Selector,
    ) -> impl Iterator<Item = &'a mut Element> + 'a {
        self.elements.iter_mut().filter(move |el| selector.matches(el))
    }
}
