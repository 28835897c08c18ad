use web_sys::Document;

use crate::config::NavConfig;
use crate::util::nav::is_current_link;

/// Mark the navigation links that point at the current page.
pub fn highlight_current(document: &Document, config: &NavConfig) {
    let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) else {
        return;
    };
    for link in super::query_all(document, &config.link_selector) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if is_current_link(&path, &href) {
            let _ = link.class_list().add_1(&config.current_class);
        }
    }
}
