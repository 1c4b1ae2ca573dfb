//! The click handler behind the dark-mode control.

use crate::{
    config::ThemeConfig,
    error::ThemeError,
    store::{ColorSchemeProbe, PreferenceStore, ThemeSurface},
    theme::{next_theme, Theme, ThemePreference},
};

/// Flips the page between light and dark and remembers the choice.
pub struct ThemeToggler<S, D, P> {
    config: ThemeConfig,
    store: S,
    surface: D,
    probe: P,
}

impl<S, D, P> ThemeToggler<S, D, P>
where
    S: PreferenceStore,
    D: ThemeSurface,
    P: ColorSchemeProbe,
{
    /// Wire a toggler to its storage, page and system-preference source.
    pub fn new(config: ThemeConfig, store: S, surface: D, probe: P) -> Self {
        Self {
            config,
            store,
            surface,
            probe,
        }
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Backing page surface.
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// System preference source.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// What the storage key holds right now.
    pub fn preference(&self) -> Result<ThemePreference, ThemeError> {
        let raw = self.store.get(&self.config.storage_key)?;
        Ok(ThemePreference::from_stored(raw.as_deref()))
    }

    /// Handle one click on the control.
    ///
    /// Writes the flipped theme, then reads the key back and paints whatever
    /// it holds. A missing icon aborts painting after storage was written.
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        let preference = self.preference()?;
        let next = next_theme(preference, || self.probe.prefers_dark());
        log::debug!("dark mode toggle: {preference:?} -> {next}");

        self.store.set(&self.config.storage_key, next.stored_value())?;

        let applied = match self.preference()? {
            ThemePreference::Stored(theme) => theme,
            ThemePreference::Unset => Theme::Light,
        };
        self.apply(applied)?;
        Ok(applied)
    }

    /// Paint the effective theme without touching storage.
    pub fn restore(&self) -> Result<Theme, ThemeError> {
        let theme = self.preference()?.effective(|| self.probe.prefers_dark());
        log::debug!("dark mode restore: {theme}");
        self.apply(theme)?;
        Ok(theme)
    }

    fn apply(&self, theme: Theme) -> Result<(), ThemeError> {
        let update = theme.visual_update(&self.config);
        self.surface
            .set_icon_display(&self.config.dark_icon_id, update.dark_icon)?;
        self.surface
            .set_icon_display(&self.config.light_icon_id, update.light_icon)?;
        self.surface.remove_root_class(update.remove_class)?;
        self.surface.add_root_class(update.add_class)?;
        Ok(())
    }
}
