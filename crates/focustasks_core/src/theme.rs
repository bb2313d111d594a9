//! Light/dark theme preference.
//!
//! Purely cosmetic; stored as a JSON boolean (`true` = dark) under its own key
//! and never touches task data. Unreadable values fall back to light.

use crate::storage::{KeyValueStorage, StorageResult};
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Persisted theme flag.
pub struct ThemePreference<S: KeyValueStorage> {
    storage: S,
    key: String,
    theme: Theme,
}

impl<S: KeyValueStorage> ThemePreference<S> {
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let dark = match storage.get_item(&key) {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|err| {
                warn!(
                    "event=theme_load module=theme status=fallback reason=malformed error={}",
                    err
                );
                false
            }),
            Ok(None) => false,
            Err(err) => {
                warn!(
                    "event=theme_load module=theme status=fallback reason=read_failed error={}",
                    err
                );
                false
            }
        };

        Self {
            storage,
            key,
            theme: if dark { Theme::Dark } else { Theme::Light },
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and persists the new flag.
    ///
    /// The in-memory theme only changes once the write succeeded.
    pub fn toggle(&mut self) -> StorageResult<Theme> {
        let next = self.theme.toggled();
        let encoded = if next == Theme::Dark { "true" } else { "false" };
        self.storage.set_item(&self.key, encoded)?;
        self.theme = next;
        info!(
            "event=theme_toggle module=theme status=ok theme={}",
            next.as_str()
        );
        Ok(next)
    }
}
