//! Light/dark theme preference.
//!
//! The preference lives in two places: the browser's `localStorage` (so it
//! survives a reload) and a class on the `<html>` element (so the stylesheet
//! can switch palettes). [`ThemeStore`] is the only thing that touches
//! either, through the [`PreferenceStorage`] and [`DisplayMarker`] ports.
//! Failures of either port are logged and swallowed; the page always renders.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use thiserror::Error;
use web_sys::window;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn token(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme token {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("durable storage is unavailable")]
    StorageUnavailable,
    #[error("failed to read theme from storage: {0}")]
    StorageRead(String),
    #[error("failed to write theme to storage: {0}")]
    StorageWrite(String),
    #[error("document root element is unavailable")]
    MarkerUnavailable,
    #[error("failed to update root marker: {0}")]
    Marker(String),
}

/// Key-value persistence for the preference token.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The flag on the top-level rendering context that dark styling keys off.
pub trait DisplayMarker {
    /// Marker present for [`ThemePreference::Dark`], absent for Light.
    fn apply(&self, theme: ThemePreference) -> Result<(), ThemeError>;
}

impl<T: PreferenceStorage + ?Sized> PreferenceStorage for &T {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).write(key, value)
    }
}

impl<T: DisplayMarker + ?Sized> DisplayMarker for &T {
    fn apply(&self, theme: ThemePreference) -> Result<(), ThemeError> {
        (**self).apply(theme)
    }
}

pub struct ThemeStore<S, M> {
    storage: S,
    marker: M,
    key: &'static str,
}

impl ThemeStore<LocalStorage, RootClassMarker> {
    /// Store backed by `localStorage` and the `<html>` class list.
    pub fn browser() -> Self {
        ThemeStore::new(LocalStorage, RootClassMarker::new(config::DARK_MARKER_CLASS))
    }
}

impl<S: PreferenceStorage, M: DisplayMarker> ThemeStore<S, M> {
    pub fn new(storage: S, marker: M) -> Self {
        Self {
            storage,
            marker,
            key: config::THEME_STORAGE_KEY,
        }
    }

    /// Resolves the persisted preference and syncs the root marker to it.
    ///
    /// A missing key, a storage failure or an unrecognized token all resolve
    /// to [`ThemePreference::Light`].
    pub fn initialize(&self) -> ThemePreference {
        let theme = match self.storage.read(self.key) {
            Ok(Some(token)) => token.parse::<ThemePreference>().unwrap_or_else(|e| {
                warn!("Ignoring stored theme: {}", e);
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                warn!("Falling back to light theme: {}", e);
                ThemePreference::default()
            }
        };
        self.sync_marker(theme);
        debug!("Initialized theme: {}", theme);
        theme
    }

    /// Flips `current`, persists the result and updates the root marker.
    ///
    /// Always returns the flipped value; a failed write only means the
    /// choice will not survive a reload.
    pub fn toggle(&self, current: ThemePreference) -> ThemePreference {
        let next = current.opposite();
        if let Err(e) = self.storage.write(self.key, next.token()) {
            warn!("Theme preference not persisted: {}", e);
        }
        self.sync_marker(next);
        debug!("Theme toggled: {} -> {}", current, next);
        next
    }

    fn sync_marker(&self, theme: ThemePreference) {
        if let Err(e) = self.marker.apply(theme) {
            warn!("Root theme marker not updated: {}", e);
        }
    }
}

/// `window.localStorage`. Resolved on every call; browsers can deny access
/// (private mode, disabled storage) and that surfaces as
/// [`ThemeError::StorageUnavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, ThemeError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(ThemeError::StorageUnavailable)
    }
}

impl PreferenceStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ThemeError::StorageRead(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::StorageWrite(format!("{:?}", e)))
    }
}

/// A class on `document.documentElement`.
#[derive(Clone, Debug)]
pub struct RootClassMarker {
    class: &'static str,
}

impl RootClassMarker {
    pub fn new(class: &'static str) -> Self {
        Self { class }
    }
}

impl DisplayMarker for RootClassMarker {
    fn apply(&self, theme: ThemePreference) -> Result<(), ThemeError> {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or(ThemeError::MarkerUnavailable)?;
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1(self.class)
        } else {
            classes.remove_1(self.class)
        };
        result.map_err(|e| ThemeError::Marker(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    pub struct MemoryStorage {
        pub values: RefCell<HashMap<String, String>>,
        pub fail_reads: Cell<bool>,
        pub fail_writes: Cell<bool>,
    }

    impl MemoryStorage {
        pub fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.values.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        pub fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
            if self.fail_reads.get() {
                return Err(ThemeError::StorageUnavailable);
            }
            Ok(self.get(key))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
            if self.fail_writes.get() {
                return Err(ThemeError::StorageWrite("quota exceeded".into()));
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct FlagMarker {
        pub present: Cell<bool>,
        pub broken: Cell<bool>,
    }

    impl DisplayMarker for FlagMarker {
        fn apply(&self, theme: ThemePreference) -> Result<(), ThemeError> {
            if self.broken.get() {
                return Err(ThemeError::MarkerUnavailable);
            }
            self.present.set(theme.is_dark());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FlagMarker, MemoryStorage};
    use super::*;

    const KEY: &str = config::THEME_STORAGE_KEY;

    #[test]
    fn tokens_parse_back() {
        assert_eq!("light".parse(), Ok(ThemePreference::Light));
        assert_eq!("dark".parse(), Ok(ThemePreference::Dark));
        assert_eq!(
            "Dark".parse::<ThemePreference>(),
            Err(UnknownTheme("Dark".to_string()))
        );
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }

    #[test]
    fn toggle_parity_from_light() {
        let storage = MemoryStorage::default();
        let marker = FlagMarker::default();
        let store = ThemeStore::new(&storage, &marker);

        let mut theme = ThemePreference::Light;
        for n in 1..=9 {
            theme = store.toggle(theme);
            let expected = if n % 2 == 0 {
                ThemePreference::Light
            } else {
                ThemePreference::Dark
            };
            assert_eq!(theme, expected, "after {} toggles", n);
            assert_eq!(marker.present.get(), expected.is_dark());
        }
    }

    #[test]
    fn initialize_reads_dark_token() {
        let storage = MemoryStorage::with(KEY, "dark");
        let marker = FlagMarker::default();
        let store = ThemeStore::new(&storage, &marker);

        assert_eq!(store.initialize(), ThemePreference::Dark);
        assert!(marker.present.get());
    }

    #[test]
    fn initialize_light_token_or_missing_key_clears_marker() {
        for storage in [MemoryStorage::with(KEY, "light"), MemoryStorage::default()] {
            let marker = FlagMarker::default();
            marker.present.set(true);
            let store = ThemeStore::new(&storage, &marker);

            assert_eq!(store.initialize(), ThemePreference::Light);
            assert!(!marker.present.get());
        }
    }

    #[test]
    fn initialize_falls_back_on_garbage_or_unreadable_storage() {
        let marker = FlagMarker::default();

        let garbage = MemoryStorage::with(KEY, "purple");
        assert_eq!(ThemeStore::new(&garbage, &marker).initialize(), ThemePreference::Light);

        let unreadable = MemoryStorage::with(KEY, "dark");
        unreadable.fail_reads.set(true);
        assert_eq!(ThemeStore::new(&unreadable, &marker).initialize(), ThemePreference::Light);
        assert!(!marker.present.get());
    }

    #[test]
    fn initialize_is_idempotent() {
        let storage = MemoryStorage::with(KEY, "dark");
        let marker = FlagMarker::default();
        let store = ThemeStore::new(&storage, &marker);

        let first = store.initialize();
        let second = store.initialize();
        assert_eq!(first, second);
        assert!(marker.present.get());
        assert_eq!(storage.get(KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn double_toggle_restores_persisted_token() {
        let storage = MemoryStorage::with(KEY, "dark");
        let marker = FlagMarker::default();
        let store = ThemeStore::new(&storage, &marker);

        let theme = store.initialize();
        let theme = store.toggle(theme);
        assert_eq!(storage.get(KEY).as_deref(), Some("light"));
        store.toggle(theme);
        assert_eq!(storage.get(KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_survives_write_failure() {
        let storage = MemoryStorage::with(KEY, "light");
        storage.fail_writes.set(true);
        let marker = FlagMarker::default();
        let store = ThemeStore::new(&storage, &marker);

        assert_eq!(store.toggle(ThemePreference::Light), ThemePreference::Dark);
        assert!(marker.present.get());
        assert_eq!(storage.get(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn toggle_survives_missing_marker() {
        let storage = MemoryStorage::default();
        let marker = FlagMarker::default();
        marker.broken.set(true);
        let store = ThemeStore::new(&storage, &marker);

        assert_eq!(store.toggle(ThemePreference::Dark), ThemePreference::Light);
        assert_eq!(storage.get(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn empty_storage_session() {
        let storage = MemoryStorage::default();
        let marker = FlagMarker::default();
        let store = ThemeStore::new(&storage, &marker);

        let theme = store.initialize();
        assert_eq!(theme, ThemePreference::Light);
        assert!(!marker.present.get());

        let theme = store.toggle(theme);
        assert_eq!(theme, ThemePreference::Dark);
        assert_eq!(storage.get(KEY).as_deref(), Some("dark"));
        assert!(marker.present.get());

        let theme = store.toggle(theme);
        assert_eq!(theme, ThemePreference::Light);
        assert_eq!(storage.get(KEY).as_deref(), Some("light"));
        assert!(!marker.present.get());
    }
}
