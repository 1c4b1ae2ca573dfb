//! In-memory stand-ins for storage, the page and the system preference.
//!
//! Built for this crate's tests, and for dependents that enable the
//! `test-util` feature.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeSet, HashMap},
};

use crate::{
    error::ThemeError,
    store::{ColorSchemeProbe, PreferenceStore, ThemeSurface},
    theme::IconDisplay,
};

/// `HashMap`-backed [`PreferenceStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Current value of `key`.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// In-memory stand-in for the page: a set of icon ids with their inline
/// display, plus the root element's class list.
#[derive(Debug, Default)]
pub struct MemorySurface {
    icons: RefCell<HashMap<String, Option<IconDisplay>>>,
    root_classes: RefCell<BTreeSet<String>>,
}

impl MemorySurface {
    /// Page with the given icon ids present and no inline display set.
    pub fn with_icons<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let surface = Self::default();
        surface
            .icons
            .borrow_mut()
            .extend(ids.into_iter().map(|id| (id.to_string(), None)));
        surface
    }

    /// Inline display of an icon; `None` if the icon is absent or untouched.
    pub fn icon_display(&self, id: &str) -> Option<IconDisplay> {
        self.icons.borrow().get(id).copied().flatten()
    }

    /// Whether the root carries `class`.
    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.borrow().contains(class)
    }

    /// Root classes in sorted order.
    pub fn root_classes(&self) -> Vec<String> {
        self.root_classes.borrow().iter().cloned().collect()
    }
}

impl ThemeSurface for MemorySurface {
    fn set_icon_display(&self, id: &str, display: IconDisplay) -> Result<(), ThemeError> {
        let mut icons = self.icons.borrow_mut();
        let slot = icons
            .get_mut(id)
            .ok_or_else(|| ThemeError::missing(format!("#{id}")))?;
        *slot = Some(display);
        Ok(())
    }

    fn remove_root_class(&self, class: &str) -> Result<(), ThemeError> {
        self.root_classes.borrow_mut().remove(class);
        Ok(())
    }

    fn add_root_class(&self, class: &str) -> Result<(), ThemeError> {
        self.root_classes.borrow_mut().insert(class.to_string());
        Ok(())
    }
}

/// Fixed answer for the system preference, counting how often it is asked.
#[derive(Debug, Default)]
pub struct FixedScheme {
    dark: bool,
    queries: Cell<usize>,
}

impl FixedScheme {
    /// System reports dark.
    pub fn dark() -> Self {
        Self {
            dark: true,
            queries: Cell::new(0),
        }
    }

    /// System reports light.
    pub fn light() -> Self {
        Self::default()
    }

    /// Number of times [`ColorSchemeProbe::prefers_dark`] was called.
    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl ColorSchemeProbe for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.dark
    }
}
