//! Language change notifications.
//!
//! Listeners subscribe to a `ChangeNotifier` and receive every
//! `LanguageChanged` emitted after they subscribed. Delivery is synchronous,
//! in subscription order, and does not care how many listeners exist.

use crate::i18n::LanguageCode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Name under which the event is published to page scripts.
pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

/// Payload emitted after a user-driven language change has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageChanged {
    /// The newly selected language
    pub language: LanguageCode,

    /// The language shown before the change
    pub previous: Option<LanguageCode>,

    pub changed_at: DateTime<Utc>,
}

impl LanguageChanged {
    pub fn new(language: LanguageCode, previous: Option<LanguageCode>) -> Self {
        Self {
            language,
            previous,
            changed_at: Utc::now(),
        }
    }

    /// Event name, for consumers that route on it.
    pub fn name(&self) -> &'static str {
        LANGUAGE_CHANGED_EVENT
    }
}

/// Callback invoked for every change.
pub type LanguageListener = Arc<dyn Fn(&LanguageChanged) + Send + Sync>;

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registry of change listeners.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    listeners: Vec<(SubscriptionId, LanguageListener)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&LanguageChanged) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Arc::new(listener)));
        debug!("Language listener {:?} subscribed", id);
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        before != self.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver an event to every listener. Returns how many were called.
    pub fn emit(&self, event: &LanguageChanged) -> usize {
        for (_, listener) in &self.listeners {
            listener(event);
        }
        self.listeners.len()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn event(code: &str) -> LanguageChanged {
        LanguageChanged::new(LanguageCode::new(code), None)
    }

    #[test]
    fn test_emit_without_listeners() {
        let notifier = ChangeNotifier::new();
        assert_eq!(notifier.emit(&event("fr")), 0);
    }

    #[test]
    fn test_emit_reaches_every_listener_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        for tag in ["a", "b"] {
            let seen = Arc::clone(&seen);
            notifier.subscribe(move |e| {
                seen.lock().unwrap().push(format!("{}:{}", tag, e.language));
            });
        }

        assert_eq!(notifier.emit(&event("de")), 2);
        assert_eq!(*seen.lock().unwrap(), vec!["a:de", "b:de"]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut notifier = ChangeNotifier::new();
        let id = notifier.subscribe(|_| {});
        let other = notifier.subscribe(|_| {});

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        assert_eq!(notifier.listener_count(), 1);
        assert_ne!(id, other);
    }

    #[test]
    fn test_event_name_and_payload() {
        let e = LanguageChanged::new(LanguageCode::new("fr"), Some(LanguageCode::new("en")));
        assert_eq!(e.name(), "languageChanged");

        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["language"], "fr");
        assert_eq!(json["previous"], "en");
    }
}
