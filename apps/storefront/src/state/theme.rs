//! # Theme State
//!
//! The light/dark appearance. The current mode lives in a `watch` channel,
//! so the channel is both the source of truth and the change feed.

use std::sync::Arc;

use gallery_core::ThemeMode;
use tokio::sync::watch;
use tracing::{debug, warn};

use super::preferences::PreferenceStore;

/// Shared handle to the session's theme.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    mode: Arc<watch::Sender<ThemeMode>>,
    prefs: Arc<dyn PreferenceStore>,
}

impl ThemeStore {
    /// Starts from the stored preference, or `system_default` if none.
    ///
    /// An unreadable preference is logged and treated as absent.
    pub fn load(prefs: Arc<dyn PreferenceStore>, system_default: ThemeMode) -> Self {
        let initial = match prefs.load_theme() {
            Ok(Some(stored)) => stored,
            Ok(None) => system_default,
            Err(e) => {
                warn!("Failed to read theme preference: {}. Using system default.", e);
                system_default
            }
        };
        debug!(theme = initial.as_str(), "Theme loaded");

        let (mode, _) = watch::channel(initial);
        ThemeStore {
            mode: Arc::new(mode),
            prefs,
        }
    }

    pub fn theme(&self) -> ThemeMode {
        *self.mode.borrow()
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    /// Flips light/dark, persists the choice and notifies subscribers.
    ///
    /// Never fails: if the preference cannot be written the in-memory mode
    /// still flips and the error is logged.
    ///
    /// The write happens while the channel value is locked, so concurrent
    /// toggles persist in the same order they flip.
    pub fn toggle_theme(&self) -> ThemeMode {
        let mut next = ThemeMode::default();
        self.mode.send_modify(|mode| {
            *mode = mode.toggled();
            next = *mode;
            if let Err(e) = self.prefs.save_theme(next) {
                warn!(theme = next.as_str(), "Failed to persist theme preference: {}", e);
            }
        });
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.mode.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::preferences::{MemoryPreferences, PreferenceError, PreferenceResult};

    /// Backend whose writes always fail.
    #[derive(Debug)]
    struct ReadOnlyPreferences;

    impl PreferenceStore for ReadOnlyPreferences {
        fn load_theme(&self) -> PreferenceResult<Option<ThemeMode>> {
            Ok(None)
        }

        fn save_theme(&self, _mode: ThemeMode) -> PreferenceResult<()> {
            Err(PreferenceError::NoPath)
        }
    }

    #[test]
    fn test_load_uses_system_default_without_preference() {
        let store = ThemeStore::load(Arc::new(MemoryPreferences::default()), ThemeMode::Dark);
        assert_eq!(store.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_stored_preference_wins() {
        let prefs = Arc::new(MemoryPreferences::new(Some(ThemeMode::Light)));
        let store = ThemeStore::load(prefs, ThemeMode::Dark);
        assert!(!store.is_dark());
    }

    #[test]
    fn test_toggle_persists() {
        let prefs = Arc::new(MemoryPreferences::default());
        let store = ThemeStore::load(prefs.clone(), ThemeMode::Light);

        assert_eq!(store.toggle_theme(), ThemeMode::Dark);
        assert_eq!(prefs.load_theme().unwrap(), Some(ThemeMode::Dark));

        assert_eq!(store.toggle_theme(), ThemeMode::Light);
        assert_eq!(prefs.load_theme().unwrap(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_toggle_survives_failed_write() {
        let store = ThemeStore::load(Arc::new(ReadOnlyPreferences), ThemeMode::Light);
        assert_eq!(store.toggle_theme(), ThemeMode::Dark);
        assert!(store.is_dark());
    }

    #[test]
    fn test_concurrent_toggles_persist_last_flip() {
        let prefs = Arc::new(MemoryPreferences::default());
        let store = ThemeStore::load(prefs.clone(), ThemeMode::Light);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.toggle_theme();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // 200 flips land back on light, and storage agrees with memory.
        assert_eq!(store.theme(), ThemeMode::Light);
        assert_eq!(prefs.load_theme().unwrap(), Some(store.theme()));
    }

    #[test]
    fn test_subscribers_see_toggle() {
        let store = ThemeStore::load(Arc::new(MemoryPreferences::default()), ThemeMode::Light);
        let mut rx = store.subscribe();

        store.toggle_theme();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ThemeMode::Dark);
    }
}
