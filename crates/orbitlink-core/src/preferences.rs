//! Browser-local preference flags.
//!
//! Only two keys are ever written: the chosen theme and whether the
//! first-visit newsletter modal has been seen.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::SiteResult;

/// Saved theme key (shared with the search page)
pub const THEME_KEY: &str = "ts-theme";
/// Set once the newsletter modal has been dismissed
pub const NEWSLETTER_SEEN_KEY: &str = "ts-newsletter-modal-seen";

/// Key/value string store (browser `localStorage`, memory in tests)
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> SiteResult<()>;
}

/// Color theme applied as `data-theme` on the document element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored value; anything but `light`/`dark` is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Font Awesome icon shown on the toggle button.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Dark => "fa-solid fa-moon",
            Theme::Light => "fa-solid fa-sun",
        }
    }
}

/// Typed access to the two preference flags.
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn saved_theme(&self) -> Option<Theme> {
        self.store.get(THEME_KEY).as_deref().and_then(Theme::parse)
    }

    pub fn save_theme(&self, theme: Theme) -> SiteResult<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Any stored value counts as seen.
    pub fn newsletter_seen(&self) -> bool {
        self.store
            .get(NEWSLETTER_SEEN_KEY)
            .is_some_and(|value| !value.is_empty())
    }

    pub fn mark_newsletter_seen(&self) -> SiteResult<()> {
        self.store.set(NEWSLETTER_SEEN_KEY, "1")
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> SiteResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SiteResult<()> {
        (**self).set(key, value)
    }
}
