//! Scroll-triggered fade-in for marked sections.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::FadeInConfig;
use crate::error::js_message;
use crate::state::reveal::RevealTracker;

/// Watch every section matching the configured selector and add the visible
/// class the first time each one crosses the threshold.
pub fn observe_sections(document: &Document, config: &FadeInConfig) {
    let sections = super::query_all(document, &config.selector);
    if sections.is_empty() {
        return;
    }

    let visible_class = config.visible_class.clone();
    let watched = sections.clone();
    let mut tracker = RevealTracker::new(sections.len());
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = watched.iter().position(|section| *section == target) else {
                continue;
            };
            if tracker.on_intersection(index, entry.is_intersecting()) {
                let _ = target.class_list().add_1(&visible_class);
                observer.unobserve(&target);
            }
        }
        if tracker.pending() == 0 {
            observer.disconnect();
            log::debug!("all fade-in sections revealed");
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(config.threshold));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("fade-in disabled: {}", js_message(&err));
            return;
        }
    };
    for section in &sections {
        observer.observe(section);
    }
    log::debug!("observing {} fade-in sections", sections.len());
    callback.forget();
}
