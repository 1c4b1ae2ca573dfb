//! Dark-mode toggle for the documentation site.
//!
//! The logic here never touches a browser: storage, the page and the system
//! color-scheme preference are reached through the traits in [`store`], and
//! the frontend crate supplies `web-sys` implementations of them.

pub mod config;
mod error;
pub mod store;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
pub mod theme;
pub mod toggle;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use store::{ColorSchemeProbe, PreferenceStore, ThemeSurface};
pub use theme::{next_theme, IconDisplay, Theme, ThemePreference, VisualUpdate};
pub use toggle::ThemeToggler;
