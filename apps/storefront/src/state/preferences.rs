//! # Preference Storage
//!
//! Where the shopper's theme choice survives between sessions.
//!
//! ```text
//! ThemeStore ──► dyn PreferenceStore ──┬──► FilePreferences   (preferences.json)
//!                                      └──► MemoryPreferences (tests, embedding)
//! ```

use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use gallery_core::ThemeMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from reading or writing stored preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("No preference path available")]
    NoPath,
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;

/// Backend for persisted shopper preferences.
pub trait PreferenceStore: Send + Sync + Debug {
    /// The stored theme, or `None` if the shopper never chose one.
    fn load_theme(&self) -> PreferenceResult<Option<ThemeMode>>;

    fn save_theme(&self, mode: ThemeMode) -> PreferenceResult<()>;
}

/// On-disk shape of the preferences file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Preferences {
    theme: Option<ThemeMode>,
}

/// Preferences kept in a JSON file.
///
/// ## Default Location
/// - **macOS**: `~/Library/Application Support/com.artisan.gallery/preferences.json`
/// - **Windows**: `%APPDATA%\artisan\gallery\config\preferences.json`
/// - **Linux**: `~/.config/gallery/preferences.json`
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FilePreferences { path: path.into() }
    }

    /// Uses the platform config directory.
    pub fn at_default_path() -> PreferenceResult<Self> {
        Self::default_path()
            .map(Self::new)
            .ok_or(PreferenceError::NoPath)
    }

    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "artisan", "gallery")
            .map(|dirs| dirs.config_dir().join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> PreferenceResult<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl PreferenceStore for FilePreferences {
    fn load_theme(&self) -> PreferenceResult<Option<ThemeMode>> {
        Ok(self.read()?.theme)
    }

    fn save_theme(&self, mode: ThemeMode) -> PreferenceResult<()> {
        // A corrupt file is replaced rather than blocking the save.
        let mut prefs = self.read().unwrap_or_default();
        prefs.theme = Some(mode);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&prefs)?)?;

        debug!(path = ?self.path, theme = mode.as_str(), "Theme preference saved");
        Ok(())
    }
}

/// Preferences that live only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    theme: Mutex<Option<ThemeMode>>,
}

impl MemoryPreferences {
    pub fn new(theme: Option<ThemeMode>) -> Self {
        MemoryPreferences {
            theme: Mutex::new(theme),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_theme(&self) -> PreferenceResult<Option<ThemeMode>> {
        Ok(*self.theme.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn save_theme(&self, mode: ThemeMode) -> PreferenceResult<()> {
        *self.theme.lock().unwrap_or_else(PoisonError::into_inner) = Some(mode);
        Ok(())
    }
}
