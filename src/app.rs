//! Module entry point: the two page-load passes.
//!
//! The WASM start function runs the early theme pass immediately, then runs
//! the ready pass on `DOMContentLoaded`. Because the module is fetched and
//! instantiated asynchronously, the document may already be parsed by the
//! time `start` runs; in that case the ready pass runs right away.

use wasm_bindgen::{JsCast, closure::Closure, prelude::wasm_bindgen};
use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig, ThemeConfig};
use crate::dom::body::BodySurface;
use crate::dom::storage::browser_store;
use crate::dom::{fade_in, form, nav};
use crate::error::js_message;
use crate::util::boot::ready_now;
use crate::util::dark_mode::ThemeController;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Trace);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = load_config(&document);
    log::set_max_level(config.log_level.to_level().to_level_filter());

    early_pass(&document, &config.theme);
    schedule_ready(document, config);
}

fn load_config(document: &Document) -> SiteConfig {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    SiteConfig::from_optional_json(raw.as_deref())
}

/// Apply the stored theme before first paint. Skipped while `<body>` does
/// not exist yet; the ready pass covers it.
fn early_pass(document: &Document, config: &ThemeConfig) {
    let Some(surface) = BodySurface::locate(document, None) else {
        log::debug!("body not parsed yet; deferring theme to ready pass");
        return;
    };
    ThemeController::new(browser_store(), surface, config.storage_key.as_str()).early_apply();
}

fn schedule_ready(document: Document, config: SiteConfig) {
    if ready_now(&document.ready_state()) {
        ready_pass(&document, &config);
        return;
    }
    let target = document.clone();
    let callback = Closure::once(move || ready_pass(&target, &config));
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
    {
        log::error!("ready pass not scheduled: {}", js_message(&err));
        return;
    }
    callback.forget();
}

fn ready_pass(document: &Document, config: &SiteConfig) {
    fade_in::observe_sections(document, &config.fade_in);
    form::bind_recommendation_form(document, &config.form);
    wire_theme(document, &config.theme);
    nav::highlight_current(document, &config.nav);
}

/// Authoritative theme pass, then hook the toggle button if the page has one.
fn wire_theme(document: &Document, config: &ThemeConfig) {
    let Some(surface) = BodySurface::locate(document, Some(&config.toggle_id)) else {
        log::warn!("document has no body; theme not applied");
        return;
    };
    let toggle = surface.toggle().cloned();
    let mut controller = ThemeController::new(browser_store(), surface, config.storage_key.as_str());
    controller.authoritative_apply();

    let Some(toggle) = toggle else {
        log::debug!("no #{} on this page; theme toggle inert", config.toggle_id);
        return;
    };
    let callback = Closure::wrap(Box::new(move || {
        controller.toggle();
    }) as Box<dyn FnMut()>);
    if let Err(err) = toggle.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref()) {
        log::warn!("theme toggle not bound: {}", js_message(&err));
        return;
    }
    callback.forget();
}
