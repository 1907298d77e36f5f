//! Theme storage backends.

use super::{StorageError, THEME_KEY, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Key-value storage for the theme flag.
pub trait ThemeStore {
    /// Reads the stored theme.
    ///
    /// `Ok(None)` means nothing usable is stored: the key is absent or
    /// holds an unrecognized value.
    fn load(&self) -> Result<Option<Theme>, StorageError>;

    /// Writes the theme.
    fn save(&mut self, theme: Theme) -> Result<(), StorageError>;
}

/// On-disk shape of the settings file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// Stores the theme in a TOML settings file (`theme = "dark"`).
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Creates a store backed by the file at `path`. The file need not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the settings file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<Theme>, StorageError> {
        if !self.path.exists() {
            debug!("Settings file absent");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let settings: SettingsFile = toml::from_str(&content)?;
        Ok(settings.theme.as_deref().and_then(parse_value))
    }

    #[instrument(skip(self), fields(path = %self.path.display(), theme = %theme))]
    fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let settings = SettingsFile {
            theme: Some(theme.storage_value().to_string()),
        };
        std::fs::write(&self.path, toml::to_string(&settings)?)?;
        info!("Theme saved");
        Ok(())
    }
}

/// Keeps the raw stored value in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `value` under the theme key.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// Returns the raw stored value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, StorageError> {
        Ok(self.value.as_deref().and_then(parse_value))
    }

    fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.value = Some(theme.storage_value().to_string());
        Ok(())
    }
}

fn parse_value(value: &str) -> Option<Theme> {
    let theme = Theme::from_storage_value(value);
    if theme.is_none() {
        warn!(key = THEME_KEY, value, "Unrecognized theme value, ignoring");
    }
    theme
}

/// Reads the startup theme, falling back to the default on any failure.
#[instrument(skip(store))]
pub(crate) fn load_or_default(store: &dyn ThemeStore) -> Theme {
    match store.load() {
        Ok(Some(theme)) => theme,
        Ok(None) => Theme::default(),
        Err(e) => {
            warn!(error = %e, "Failed to read theme, using default");
            Theme::default()
        }
    }
}
