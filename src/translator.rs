//! The translator: active-language state, key lookup, and change broadcast.
//!
//! A `Translator` is constructed once by the application's composition root
//! and passed by reference to whatever needs localized strings. View
//! components call [`Translator::translate`] in their render path and
//! subscribe to [`LanguageChanged`] to know when to re-render; there is no
//! after-the-fact scan over rendered output.

use crate::catalog::Catalog;
use crate::language::Language;
use crate::metrics::TranslationMetrics;
use crate::store::PreferenceStore;
use serde::Serialize;
use tracing::{debug, warn};

/// Notification sent to subscribers after every completed language switch.
///
/// Serializes as `{"language":"<code>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageChanged {
    /// The newly active language
    pub language: Language,
}

/// Handle returned by [`Translator::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Callback = Box<dyn FnMut(&LanguageChanged)>;

/// Resolves dotted keys to localized strings and manages the active language.
pub struct Translator {
    current: Language,
    store: Box<dyn PreferenceStore>,
    subscribers: Vec<(u64, Callback)>,
    next_subscription: u64,
    metrics: TranslationMetrics,
}

impl Translator {
    /// Build a translator over a preference store.
    ///
    /// The persisted language code is read once here. An absent or
    /// unsupported value degrades to the registry default rather than
    /// failing.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        let current = match store.load_language() {
            Some(code) => match Language::from_code(&code) {
                Ok(language) => language,
                Err(err) => {
                    warn!(code = %code, error = %err, "persisted language is unsupported, using default");
                    Language::default_language()
                }
            },
            None => Language::default_language(),
        };

        Self {
            current,
            store,
            subscribers: Vec::new(),
            next_subscription: 0,
            metrics: TranslationMetrics::new(),
        }
    }

    /// Resolve a dotted key in the active language.
    ///
    /// A missing key or an empty translated value falls back to returning
    /// the key itself unchanged. The fallback is deliberately visible in the
    /// UI so untranslated keys are easy to spot; it never raises. No state
    /// changes.
    pub fn translate(&self, key: &str) -> String {
        let resolved = Catalog::get()
            .bundle(self.current.code())
            .and_then(|bundle| bundle.lookup(key));

        match resolved {
            Some(value) if !value.is_empty() => {
                self.metrics.record_lookup_hit();
                value.to_string()
            }
            _ => {
                self.metrics.record_lookup_fallback();
                warn!(
                    key,
                    language = self.current.code(),
                    "missing translation, falling back to key"
                );
                key.to_string()
            }
        }
    }

    /// Switch the active language.
    ///
    /// Unknown or disabled codes are rejected with `false` and leave all
    /// state untouched. On success the new code is persisted, every
    /// subscriber is notified, and `true` is returned. A failed preference
    /// write is logged but does not undo the switch; the preference just
    /// won't survive a restart.
    pub fn set_language(&mut self, code: &str) -> bool {
        let language = match Language::from_code(code) {
            Ok(language) => language,
            Err(err) => {
                self.metrics.record_rejected_switch();
                warn!(code, error = %err, "rejected language switch");
                return false;
            }
        };

        self.current = language;
        if let Err(err) = self.store.save_language(language.code()) {
            warn!(error = %err, "failed to persist language preference");
        }
        self.metrics.record_switch();
        debug!(language = language.code(), "language switched");

        let event = LanguageChanged { language };
        for (_, callback) in &mut self.subscribers {
            callback(&event);
        }
        true
    }

    /// The currently active language.
    pub fn current_language(&self) -> Language {
        self.current
    }

    /// Register a callback invoked after every completed language switch.
    ///
    /// Returns a [`Subscription`] handle accepted by
    /// [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&LanguageChanged) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        Subscription(id)
    }

    /// Remove a previously registered callback.
    ///
    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != subscription.0);
        self.subscribers.len() < before
    }

    /// Lookup and switch counters for this translator.
    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }
}
