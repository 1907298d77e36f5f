//! Light/dark theme flag and its persistence.
//!
//! The flag lives under a single `theme` key with the string values
//! `"light"` and `"dark"`. Anything else reads as the default light theme.

mod error;
mod store;

pub use error::StorageError;
pub(crate) use store::load_or_default;
pub use store::{FileThemeStore, MemoryThemeStore, ThemeStore};

/// Settings key the theme flag is stored under.
pub const THEME_KEY: &str = "theme";

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum Theme {
    /// Light background.
    #[default]
    #[display("light")]
    Light,
    /// Dark background.
    #[display("dark")]
    Dark,
}

impl Theme {
    /// Toggles between `Light` and `Dark`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to storage.
    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value; unknown values yield `None`.
    pub fn from_storage_value(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Label for the toggle control, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark Mode",
            Self::Dark => "☀️ Light Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_values() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_storage_value(theme.storage_value()), Some(theme));
        }
        assert_eq!(Theme::from_storage_value("Dark"), None);
        assert_eq!(Theme::from_storage_value(""), None);
    }

    #[test]
    fn test_toggle_label_names_other_theme() {
        assert!(Theme::Light.toggle_label().contains("Dark"));
        assert!(Theme::Dark.toggle_label().contains("Light"));
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }
}
