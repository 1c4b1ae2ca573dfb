//! Browser entry point: binds the dark-mode control on the documentation site.

mod config;
mod dom;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", e).into());
    }

    if let Err(err) = dom::bind_dark_mode_button(config::load()) {
        log::error!("dark mode toggle not bound: {}", err);
    }
}
