//! Light/dark theme resolution and persistence.
//!
//! DESIGN
//! ======
//! The applied theme comes from, in order: the stored user choice, the live
//! operating-system preference, then light. A stored choice sticks until it
//! is cleared, so OS changes only take effect while nothing is stored.
//! Storage sits behind [`PreferenceStore`] so the controller runs the same
//! way against `localStorage` and against the in-memory store used in tests.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// A concrete color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Interpret a stored value. Anything but `"dark"` is an explicit light choice.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Key-value storage for the single persisted preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store, used before storage is available and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Resolve the theme to apply from the stored choice and the OS signal.
#[must_use]
pub fn resolve(stored: Option<Theme>, os_prefers_dark: bool) -> Theme {
    stored.unwrap_or_else(|| Theme::from_os(os_prefers_dark))
}

/// Theme state for one page session.
///
/// Every method returns the theme that should now be applied to the
/// document, or `None` when nothing changes.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    key: String,
    applied: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the stored choice and resolve the initial theme.
    pub fn new(store: S, key: &str, os_prefers_dark: bool) -> Self {
        let stored = store.get(key).map(|raw| Theme::from_stored(&raw));
        let applied = resolve(stored, os_prefers_dark);
        Self { store, key: key.to_owned(), applied }
    }

    #[must_use]
    pub fn applied(&self) -> Theme {
        self.applied
    }

    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        self.store.get(&self.key).map(|raw| Theme::from_stored(&raw))
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip the applied theme and persist it as the user's choice.
    pub fn toggle(&mut self) -> Theme {
        self.applied = self.applied.flipped();
        self.store.set(&self.key, self.applied.as_str());
        self.applied
    }

    /// React to an OS scheme change. Ignored while a choice is stored.
    pub fn os_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.store.get(&self.key).is_some() {
            return None;
        }
        self.applied = Theme::from_os(prefers_dark);
        Some(self.applied)
    }

    /// Forget the stored choice and fall back to the OS preference.
    pub fn clear(&mut self, os_prefers_dark: bool) -> Theme {
        self.store.remove(&self.key);
        self.applied = Theme::from_os(os_prefers_dark);
        self.applied
    }
}
