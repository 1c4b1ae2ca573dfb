//! Theme model and the pure toggle decision.

use std::fmt;

use crate::config::ThemeConfig;

/// Stored value for dark mode.
pub const DARK_VALUE: &str = "true";

/// Stored value for light mode.
pub const LIGHT_VALUE: &str = "false";

/// The two visual themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// `Dark` when `dark` is set, `Light` otherwise.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written under the storage key.
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Light => LIGHT_VALUE,
            Self::Dark => DARK_VALUE,
        }
    }

    /// DOM changes that put the page into this theme.
    pub fn visual_update(self, config: &ThemeConfig) -> VisualUpdate<'_> {
        match self {
            Self::Dark => VisualUpdate {
                dark_icon: IconDisplay::None,
                light_icon: IconDisplay::Inline,
                remove_class: &config.light_class,
                add_class: &config.dark_class,
            },
            Self::Light => VisualUpdate {
                dark_icon: IconDisplay::Inline,
                light_icon: IconDisplay::None,
                remove_class: &config.dark_class,
                add_class: &config.light_class,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// What the storage key currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    /// Nothing stored yet.
    Unset,
    /// A stored value. Only `"true"` reads as dark.
    Stored(Theme),
}

impl ThemePreference {
    /// Interpret a raw storage read.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unset,
            Some(DARK_VALUE) => Self::Stored(Theme::Dark),
            Some(_) => Self::Stored(Theme::Light),
        }
    }

    /// The theme the page is considered to be in. `system_prefers_dark` is
    /// only evaluated when nothing is stored.
    pub fn effective(self, system_prefers_dark: impl FnOnce() -> bool) -> Theme {
        match self {
            Self::Unset => Theme::from_dark(system_prefers_dark()),
            Self::Stored(theme) => theme,
        }
    }
}

/// Theme a click switches to.
pub fn next_theme(
    preference: ThemePreference,
    system_prefers_dark: impl FnOnce() -> bool,
) -> Theme {
    preference.effective(system_prefers_dark).toggled()
}

/// Inline `display` value for an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconDisplay {
    /// `display: inline`
    Inline,
    /// `display: none`
    None,
}

impl IconDisplay {
    /// CSS value for the `display` property.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::None => "none",
        }
    }
}

/// DOM changes for one theme, applied in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualUpdate<'a> {
    /// Display of the dark icon.
    pub dark_icon: IconDisplay,
    /// Display of the light icon.
    pub light_icon: IconDisplay,
    /// Root class removed first.
    pub remove_class: &'a str,
    /// Root class added last.
    pub add_class: &'a str,
}
