//! Active display language and its persisted preference.
//!
//! [`LocaleStore`] is handed to whoever renders text; views subscribe to it
//! instead of reading a global. Persistence goes through a
//! [`PreferenceStore`] so the browser's `localStorage` and the in-memory
//! store used on the host are interchangeable.

use std::collections::HashMap;
use std::fmt;

use crate::error::FxResult;
use crate::i18n::{translations, Translations};

/// Key of the persisted preference.
pub const STORAGE_KEY: &str = "portfolio-locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    Pl,
    #[default]
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Pl => "pl",
            Locale::En => "en",
        }
    }

    /// Exactly `"pl"` or `"en"`; anything else is rejected.
    pub fn parse(value: &str) -> Option<Locale> {
        match value {
            "pl" => Some(Locale::Pl),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn other(self) -> Locale {
        match self {
            Locale::Pl => Locale::En,
            Locale::En => Locale::Pl,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable string key-value storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> FxResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> FxResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> FxResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> FxResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Handle returned by [`LocaleStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(Locale, &'static Translations)>;

pub struct LocaleStore<S: PreferenceStore> {
    locale: Locale,
    store: S,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

impl<S: PreferenceStore> LocaleStore<S> {
    /// Start from the persisted preference; absent, malformed or unreadable
    /// values fall back to the default locale.
    pub fn new(store: S) -> Self {
        let locale = match store.load(STORAGE_KEY) {
            Ok(Some(value)) => Locale::parse(&value).unwrap_or_else(|| {
                log::warn!("ignoring stored locale {:?}", value);
                Locale::default()
            }),
            Ok(None) => Locale::default(),
            Err(err) => {
                log::warn!("locale preference not readable: {}", err);
                Locale::default()
            }
        };
        Self {
            locale,
            store,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn translations(&self) -> &'static Translations {
        translations(self.locale)
    }

    /// Switch language, persist it and re-render subscribers on change.
    ///
    /// The value is written back even when unchanged so storage always
    /// matches the displayed language.
    pub fn set_locale(&mut self, next: Locale) {
        let changed = self.locale != next;
        self.locale = next;
        if let Err(err) = self.store.save(STORAGE_KEY, next.as_str()) {
            log::warn!("locale preference not saved: {}", err);
        }
        if changed {
            log::debug!("locale switched to {}", next);
            let text = translations(next);
            for (_, listener) in self.listeners.iter_mut() {
                listener(next, text);
            }
        }
    }

    pub fn toggle(&mut self) -> Locale {
        let next = self.locale.other();
        self.set_locale(next);
        next
    }

    /// Listeners must not call back into the store.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(Locale, &'static Translations) + 'static,
    ) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription(id)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.listeners.retain(|(id, _)| *id != subscription.0);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
