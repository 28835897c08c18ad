//! Browser bindings for the site script.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module wires one page concern to `web-sys`. Decisions are delegated
//! to `state` and `util`; this layer only looks up elements, moves values in
//! and out of the DOM, and registers callbacks that live for the page.

pub mod body;
pub mod fade_in;
pub mod form;
pub mod nav;
pub mod storage;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
