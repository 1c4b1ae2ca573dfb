//! Page-level configuration for the toggle.
//!
//! A page may ship `<script type="application/json" id="dark-mode-config">`
//! to rename the storage key, classes or icon ids. Anything it leaves out
//! keeps the built-in default.
use docs_theme_shared::{config::CONFIG_ELEMENT_ID, ThemeConfig};

pub fn load() -> ThemeConfig {
    let json = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(json) = json else {
        return ThemeConfig::default();
    };

    match ThemeConfig::from_json(&json) {
        Ok(config) => {
            log::debug!("Loaded dark mode config from #{}", CONFIG_ELEMENT_ID);
            config
        },
        Err(e) => {
            log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            ThemeConfig::default()
        },
    }
}
