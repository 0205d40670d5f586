//! Explicit locale state with change subscriptions.
//!
//! The generated `core` module keeps the current language in module-level state. On
//! the Rust side the same contract lives in a [`LocaleRegistry`] value that callers
//! construct and pass around, so several independent locale contexts can coexist.

use std::fmt;

use indexmap::IndexMap;

use super::{LanguageCode, UnknownLocaleError};

type Listener = Box<dyn Fn(&LanguageCode)>;

/// Handle returned by [`LocaleRegistry::subscribe`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "dropping a subscription does not unsubscribe; pass it to `unsubscribe`"]
pub struct Subscription {
    name: String,
}

impl Subscription {
    pub fn name(&self) -> &str {
        &self.name
    }
}

pub struct LocaleRegistry {
    languages: Vec<LanguageCode>,
    current: LanguageCode,
    listeners: IndexMap<String, Listener>,
}

impl LocaleRegistry {
    /// Create a registry whose current locale is `default`.
    ///
    /// `default` is added to the language list when it is not already part of it.
    pub fn new(languages: impl IntoIterator<Item = LanguageCode>, default: LanguageCode) -> Self {
        let mut languages: Vec<LanguageCode> = languages.into_iter().collect();
        if !languages.contains(&default) {
            languages.insert(0, default.clone());
        }
        Self {
            languages,
            current: default,
            listeners: IndexMap::new(),
        }
    }

    pub fn languages(&self) -> &[LanguageCode] {
        &self.languages
    }

    pub fn current(&self) -> &LanguageCode {
        &self.current
    }

    pub fn exists(&self, locale: &str) -> bool {
        self.languages.iter().any(|l| l.as_str() == locale)
    }

    /// Switch the current locale and notify every listener in subscription order.
    pub fn set(&mut self, locale: &str) -> Result<(), UnknownLocaleError> {
        let Some(language) = self.languages.iter().find(|l| l.as_str() == locale) else {
            return Err(UnknownLocaleError {
                locale: locale.to_string(),
            });
        };

        self.current = language.clone();
        for listener in self.listeners.values() {
            listener(&self.current);
        }
        Ok(())
    }

    /// Register `listener` under `name`.
    ///
    /// Subscribing again with a known name replaces the listener and keeps its
    /// position in the notification order.
    pub fn subscribe(
        &mut self,
        name: impl Into<String>,
        listener: impl Fn(&LanguageCode) + 'static,
    ) -> Subscription {
        let name = name.into();
        self.listeners.insert(name.clone(), Box::new(listener));
        Subscription { name }
    }

    /// Remove a listener. Returns false when it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.listeners.shift_remove(&subscription.name).is_some()
    }
}

impl fmt::Debug for LocaleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleRegistry")
            .field("languages", &self.languages)
            .field("current", &self.current)
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}
