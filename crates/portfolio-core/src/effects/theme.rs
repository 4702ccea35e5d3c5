//! Light/dark theme preference.

use std::fmt;

use crate::config::PortfolioConfig;
use crate::error::PortfolioResult;
use crate::storage::KeyValueStore;

/// Toggle transform at rest
pub const TOGGLE_REST: &str = "translateY(-50%) rotate(0deg)";
/// Toggle transform while spinning after a click
pub const TOGGLE_SPIN: &str = "translateY(-50%) rotate(360deg)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute and of the stored preference
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognized is light.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon on the toggle: a sun offers the way out of dark mode
    pub fn icon(&self) -> ThemeIcon {
        match self {
            Theme::Dark => ThemeIcon::Sun,
            Theme::Light => ThemeIcon::Moon,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

/// Theme preference backed by a key-value store.
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Load the saved theme, defaulting to light.
    ///
    /// A store that cannot be read also yields light; the page must
    /// render either way.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match store.get(&key) {
            Ok(value) => value.as_deref().map(Theme::parse).unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        };
        Self {
            store,
            key,
            current,
        }
    }

    pub fn from_config(store: S, config: &PortfolioConfig) -> Self {
        Self::load(store, config.theme_key.clone())
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the new value.
    ///
    /// The in-memory theme changes even if persisting fails.
    pub fn toggle(&mut self) -> PortfolioResult<Theme> {
        self.current = self.current.toggled();
        tracing::info!(theme = %self.current, "Theme toggled");
        self.store.set(&self.key, self.current.as_str())?;
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_to_light() {
        let pref = ThemePreference::load(MemoryStore::new(), "theme");
        assert_eq!(pref.current(), Theme::Light);
        assert_eq!(pref.current().icon(), ThemeIcon::Moon);
    }

    #[test]
    fn test_loads_saved_dark() {
        let store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        let pref = ThemePreference::load(store, "theme");
        assert_eq!(pref.current(), Theme::Dark);
        assert_eq!(pref.current().icon(), ThemeIcon::Sun);
    }

    #[test]
    fn test_unknown_value_is_light() {
        let store = MemoryStore::new();
        store.set("theme", "solarized").unwrap();
        assert_eq!(ThemePreference::load(store, "theme").current(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        let mut pref = ThemePreference::load(store.clone(), "theme");

        assert_eq!(pref.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        assert_eq!(pref.toggle().unwrap(), Theme::Light);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_survives_write_failure() {
        let mut pref = ThemePreference::load(MemoryStore::with_quota(0), "theme");
        assert!(pref.toggle().is_err());
        assert_eq!(pref.current(), Theme::Dark);
    }
}
