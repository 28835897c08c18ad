use web_sys::{Document, Element, HtmlElement};

use crate::state::theme::ToggleAffordance;
use crate::util::dark_mode::ThemeSurface;

/// `<body>` carrying the theme classes, plus the toggle button if present.
pub struct BodySurface {
    body: HtmlElement,
    toggle: Option<Element>,
}

impl BodySurface {
    /// Returns `None` while the parser has not reached `<body>` yet.
    pub fn locate(document: &Document, toggle_id: Option<&str>) -> Option<Self> {
        let body = document.body()?;
        let toggle = toggle_id.and_then(|id| document.get_element_by_id(id));
        Some(Self { body, toggle })
    }

    pub fn toggle(&self) -> Option<&Element> {
        self.toggle.as_ref()
    }
}

impl ThemeSurface for BodySurface {
    fn has_marker(&self, marker: &str) -> bool {
        self.body.class_list().contains(marker)
    }

    fn add_marker(&mut self, marker: &str) {
        let _ = self.body.class_list().add_1(marker);
    }

    fn remove_marker(&mut self, marker: &str) {
        let _ = self.body.class_list().remove_1(marker);
    }

    fn label_toggle(&mut self, affordance: ToggleAffordance) {
        if let Some(toggle) = &self.toggle {
            toggle.set_text_content(Some(affordance.glyph));
            let _ = toggle.set_attribute("aria-label", affordance.aria_label);
        }
    }
}
