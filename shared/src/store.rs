//! Seams between the toggle logic and the page it runs on.
//!
//! The browser implementations live in the frontend crate.

use crate::{error::ThemeError, theme::IconDisplay};

/// Key/value storage for the persisted preference.
pub trait PreferenceStore {
    /// Read a key. `Ok(None)` when it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Write a key.
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The DOM pieces the toggler updates.
pub trait ThemeSurface {
    /// Set the inline `display` of the element with `id`.
    fn set_icon_display(&self, id: &str, display: IconDisplay) -> Result<(), ThemeError>;

    /// Remove a class from the document root.
    fn remove_root_class(&self, class: &str) -> Result<(), ThemeError>;

    /// Add a class to the document root.
    fn add_root_class(&self, class: &str) -> Result<(), ThemeError>;
}

/// Source of the system color-scheme preference.
pub trait ColorSchemeProbe {
    /// Whether the environment reports a dark color-scheme preference.
    fn prefers_dark(&self) -> bool;
}
