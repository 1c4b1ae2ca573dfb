//! `web-sys` side of the toggle: localStorage, the live document,
//! `matchMedia`, and the click binding.

use docs_theme_shared::{
    ColorSchemeProbe, IconDisplay, PreferenceStore, ThemeConfig, ThemeError, ThemeSurface,
    ThemeToggler,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, HtmlElement, Storage, SvgElement, Window,
};

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// `window.localStorage`.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    pub fn new(window: &Window) -> Result<Self, ThemeError> {
        let storage = window
            .local_storage()
            .map_err(|e| ThemeError::Storage(format!("localStorage access error: {}", js_error(e))))?
            .ok_or_else(|| ThemeError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_error(e)))
    }
}

pub struct DocumentSurface {
    document: Document,
}

impl DocumentSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn root(&self) -> Result<Element, ThemeError> {
        self.document
            .document_element()
            .ok_or_else(|| ThemeError::missing("document root"))
    }
}

// Icons are usually inline <svg>, which is not an HtmlElement.
fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        return Some(el.style());
    }
    element.dyn_ref::<SvgElement>().map(SvgElement::style)
}

impl ThemeSurface for DocumentSurface {
    fn set_icon_display(&self, id: &str, display: IconDisplay) -> Result<(), ThemeError> {
        let icon = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ThemeError::missing(format!("#{id}")))?;
        let style = inline_style(&icon)
            .ok_or_else(|| ThemeError::missing(format!("#{id} has no inline style")))?;
        style
            .set_property("display", display.as_css())
            .map_err(|e| ThemeError::Dom(format!("#{id}: {}", js_error(e))))
    }

    fn remove_root_class(&self, class: &str) -> Result<(), ThemeError> {
        self.root()?
            .class_list()
            .remove_1(class)
            .map_err(|e| ThemeError::Dom(format!("remove class {class:?}: {}", js_error(e))))
    }

    fn add_root_class(&self, class: &str) -> Result<(), ThemeError> {
        self.root()?
            .class_list()
            .add_1(class)
            .map_err(|e| ThemeError::Dom(format!("add class {class:?}: {}", js_error(e))))
    }
}

/// `window.matchMedia(query).matches`; false when the query cannot run.
pub struct MediaQueryProbe {
    window: Window,
    query: String,
}

impl MediaQueryProbe {
    pub fn new(window: Window, query: impl Into<String>) -> Self {
        Self {
            window,
            query: query.into(),
        }
    }
}

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> bool {
        self.window
            .match_media(&self.query)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
}

fn find_button(document: &Document, class: &str) -> Result<Element, ThemeError> {
    document
        .get_elements_by_class_name(class)
        .item(0)
        .ok_or_else(|| ThemeError::missing(format!(".{class}")))
}

/// Attach the toggle to the first `.dark-mode-button` for the life of the
/// page, after syncing the icons with the stored preference.
pub fn bind_dark_mode_button(config: ThemeConfig) -> Result<(), ThemeError> {
    let window = web_sys::window().ok_or_else(|| ThemeError::missing("window"))?;
    let document = window
        .document()
        .ok_or_else(|| ThemeError::missing("document"))?;
    let button = find_button(&document, &config.button_class)?;

    let store = LocalStorageStore::new(&window)?;
    let probe = MediaQueryProbe::new(window, config.dark_scheme_query.clone());
    let toggler = ThemeToggler::new(config, store, DocumentSurface::new(document), probe);

    if let Err(err) = toggler.restore() {
        log::warn!("dark mode restore skipped: {}", err);
    }

    let onclick = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        match toggler.toggle() {
            Ok(theme) => log::debug!("dark mode switched to {}", theme),
            Err(err) => log::error!("dark mode toggle failed: {}", err),
        }
    }) as Box<dyn FnMut(Event)>);

    button
        .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Dom(format!("click listener: {}", js_error(e))))?;
    // The button lives as long as the page.
    onclick.forget();

    log::info!("dark mode toggle bound");
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use docs_theme_shared::testing::MemoryStore;
    use wasm_bindgen_test::*;
    use web_sys::EventInit;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window()
            .and_then(|w| w.document())
            .expect("browser document")
    }

    fn local_storage() -> LocalStorageStore {
        LocalStorageStore::new(&web_sys::window().expect("window")).expect("localStorage")
    }

    fn mount_icons(document: &Document) {
        let body = document.body().expect("body");
        for id in ["icon-dark", "icon-light"] {
            if document.get_element_by_id(id).is_none() {
                let icon = document.create_element("span").expect("create icon");
                icon.set_id(id);
                body.append_child(&icon).expect("mount icon");
            }
        }
    }

    fn mount_button(document: &Document, class: &str) -> HtmlElement {
        let button = document.create_element("a").expect("create button");
        button.set_class_name(class);
        button.set_attribute("href", "#top").expect("href");
        document
            .body()
            .expect("body")
            .append_child(&button)
            .expect("mount button");
        button.dyn_into::<HtmlElement>().expect("anchor is an HtmlElement")
    }

    fn config_for(class: &str, key: &str) -> ThemeConfig {
        ThemeConfig {
            button_class: class.to_string(),
            storage_key: key.to_string(),
            ..ThemeConfig::default()
        }
    }

    fn display_of(document: &Document, id: &str) -> String {
        let icon = document.get_element_by_id(id).expect("icon");
        inline_style(&icon)
            .expect("style")
            .get_property_value("display")
            .expect("display")
    }

    #[wasm_bindgen_test]
    fn toggle_paints_the_live_document() {
        let document = document();
        mount_icons(&document);
        let window = web_sys::window().expect("window");

        let toggler = ThemeToggler::new(
            ThemeConfig::default(),
            MemoryStore::with_entry("dark-mode", "false"),
            DocumentSurface::new(document.clone()),
            MediaQueryProbe::new(window, "(prefers-color-scheme: dark)"),
        );
        toggler.toggle().expect("toggle");

        let root = document.document_element().expect("root");
        assert!(root.class_list().contains("dark-theme"));
        assert!(!root.class_list().contains("light-theme"));
        assert_eq!(display_of(&document, "icon-dark"), "none");
        assert_eq!(display_of(&document, "icon-light"), "inline");
    }

    #[wasm_bindgen_test]
    fn local_storage_round_trips_the_key() {
        let store = local_storage();
        store.set("dark-mode-test", "true").expect("set");
        assert_eq!(store.get("dark-mode-test").expect("get").as_deref(), Some("true"));
        store.storage.remove_item("dark-mode-test").expect("cleanup");
    }

    #[wasm_bindgen_test]
    fn missing_icon_is_reported() {
        let surface = DocumentSurface::new(document());
        let err = surface
            .set_icon_display("no-such-icon", IconDisplay::None)
            .expect_err("absent icon");
        assert!(matches!(err, ThemeError::MissingElement(_)));
    }

    #[wasm_bindgen_test]
    fn rejected_class_name_is_a_dom_error() {
        let surface = DocumentSurface::new(document());
        // classList rejects tokens containing whitespace.
        let err = surface
            .add_root_class("two words")
            .expect_err("invalid token");
        assert!(matches!(err, ThemeError::Dom(_)));
    }

    #[wasm_bindgen_test]
    fn page_without_button_is_not_bound() {
        assert!(document()
            .get_elements_by_class_name("dark-mode-button")
            .item(0)
            .is_none());

        let err = bind_dark_mode_button(ThemeConfig::default()).expect_err("no control");
        assert!(matches!(err, ThemeError::MissingElement(ref what) if what == ".dark-mode-button"));
    }

    #[wasm_bindgen_test]
    fn only_the_first_button_is_bound() {
        let document = document();
        mount_icons(&document);
        let key = "dark-mode-first-only";
        let store = local_storage();
        store.set(key, "false").expect("seed");

        let first = mount_button(&document, "first-only-button");
        let second = mount_button(&document, "first-only-button");
        bind_dark_mode_button(config_for("first-only-button", key)).expect("bind");

        second.click();
        assert_eq!(store.get(key).expect("get").as_deref(), Some("false"));

        first.click();
        assert_eq!(store.get(key).expect("get").as_deref(), Some("true"));

        store.storage.remove_item(key).expect("cleanup");
        first.remove();
        second.remove();
    }

    #[wasm_bindgen_test]
    fn click_prevents_navigation_and_toggles() {
        let document = document();
        mount_icons(&document);
        let key = "dark-mode-click";
        let store = local_storage();
        store.set(key, "true").expect("seed");

        let button = mount_button(&document, "click-test-button");
        bind_dark_mode_button(config_for("click-test-button", key)).expect("bind");

        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("click", &init).expect("click event");
        button.dispatch_event(&event).expect("dispatch");

        assert!(event.default_prevented());
        assert_eq!(store.get(key).expect("get").as_deref(), Some("false"));
        let root = document.document_element().expect("root");
        assert!(root.class_list().contains("light-theme"));
        assert_eq!(display_of(&document, "icon-dark"), "inline");

        store.storage.remove_item(key).expect("cleanup");
        button.remove();
    }
}
