//! Recommendation form handler. Acknowledges locally; nothing is sent.

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::FormConfig;
use crate::error::js_message;
use crate::state::recommendation::Recommendation;

pub fn bind_recommendation_form(document: &Document, config: &FormConfig) {
    let Some(form) = document
        .get_element_by_id(&config.form_id)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let doc = document.clone();
    let fields = config.clone();
    let form_for_cb = form.clone();
    let callback = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        let recommendation = Recommendation {
            name: field_value(&doc, &fields.name_id),
            email: field_value(&doc, &fields.email_id),
            text: field_value(&doc, &fields.text_id),
        };
        match recommendation.acknowledge() {
            Ok(message) => {
                alert(&message);
                form_for_cb.reset();
                log::info!("recommendation acknowledged locally");
            }
            Err(err) => alert(&err.to_string()),
        }
    }) as Box<dyn FnMut(Event)>);

    if let Err(err) = form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref()) {
        log::warn!("recommendation form not bound: {}", js_message(&err));
        return;
    }
    callback.forget();
}

/// Current value of an `<input>` or `<textarea>`; empty when missing.
fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value).unwrap_or_default()
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
