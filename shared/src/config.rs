//! Identifiers the toggler reads and writes on the page.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Local storage key holding `"true"` (dark) or `"false"` (light).
pub const STORAGE_KEY: &str = "dark-mode";

/// Class of the clickable control. Only the first match is bound.
pub const BUTTON_CLASS: &str = "dark-mode-button";

/// Id of the icon shown while the page is light.
pub const DARK_ICON_ID: &str = "icon-dark";

/// Id of the icon shown while the page is dark.
pub const LIGHT_ICON_ID: &str = "icon-light";

/// Root class applied in dark mode.
pub const DARK_CLASS: &str = "dark-theme";

/// Root class applied in light mode.
pub const LIGHT_CLASS: &str = "light-theme";

/// Media query consulted when nothing is stored yet.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Element id of the optional JSON block that overrides [`ThemeConfig`].
pub const CONFIG_ELEMENT_ID: &str = "dark-mode-config";

/// Page identifiers used by the toggler.
///
/// Every field falls back to its constant above, so a page only has to name
/// the ones it renames:
///
/// ```json
/// { "storageKey": "docs-dark", "buttonClass": "theme-switch" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Storage key for the persisted preference.
    pub storage_key: String,
    /// Class of the toggle control.
    pub button_class: String,
    /// Id of the "switch to dark" icon.
    pub dark_icon_id: String,
    /// Id of the "switch to light" icon.
    pub light_icon_id: String,
    /// Root class for dark mode.
    pub dark_class: String,
    /// Root class for light mode.
    pub light_class: String,
    /// Media query for the system dark preference.
    pub dark_scheme_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            button_class: BUTTON_CLASS.to_string(),
            dark_icon_id: DARK_ICON_ID.to_string(),
            light_icon_id: LIGHT_ICON_ID.to_string(),
            dark_class: DARK_CLASS.to_string(),
            light_class: LIGHT_CLASS.to_string(),
            dark_scheme_query: DARK_SCHEME_QUERY.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON override. Blank input yields defaults.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}
