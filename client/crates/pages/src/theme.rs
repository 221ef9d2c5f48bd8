//! Theme Preference
//!
//! One process-wide theme value. Changes are persisted under
//! [`StorageKeys::THEME`] and published to every subscriber.

use platform::observable::{Observable, Subscription};
use platform::storage::{LocalStore, StorageKeys, StorageResult, get_json, set_json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system
    #[default]
    System,
}

impl Theme {
    /// Concrete theme to render, given the system preference
    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            Theme::System if system_prefers_dark => Theme::Dark,
            Theme::System => Theme::Light,
            concrete => concrete,
        }
    }
}

pub struct ThemeStore {
    store: Arc<dyn LocalStore>,
    current: Observable<Theme>,
}

impl ThemeStore {
    /// Read the saved theme; missing or unreadable values mean `System`
    pub fn load(store: Arc<dyn LocalStore>) -> Self {
        let saved = match get_json::<Theme, _>(store.as_ref(), StorageKeys::THEME) {
            Ok(theme) => theme.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring saved theme");
                Theme::default()
            }
        };
        Self {
            store,
            current: Observable::new(saved),
        }
    }

    pub fn get(&self) -> Theme {
        self.current.get()
    }

    pub fn subscribe(&self) -> Subscription<Theme> {
        self.current.subscribe()
    }

    pub fn set(&self, theme: Theme) -> StorageResult<()> {
        set_json(self.store.as_ref(), StorageKeys::THEME, &theme)?;
        self.current.set(theme);
        Ok(())
    }

    /// Flip between light and dark, resolving `System` first
    pub fn toggle(&self, system_prefers_dark: bool) -> StorageResult<Theme> {
        let next = match self.get().resolve(system_prefers_dark) {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        };
        self.set(next)?;
        Ok(next)
    }
}
