use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;

/// Vertical extent of a page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SCROLL_THRESHOLD
}

/// The section whose band `(top - offset, top - offset + height]` holds
/// `scroll_y`. Later sections win when bands overlap.
pub fn active_section(sections: &[SectionBox], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let start = section.top - config::ACTIVE_SECTION_OFFSET;
            scroll_y > start && scroll_y <= start + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - config::SCROLL_TARGET_OFFSET).max(0.0)
}

pub fn measure_sections(document: &Document) -> Vec<SectionBox> {
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBox {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

/// Smooth-scrolls so the section sits just under the fixed nav bar.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(section) = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("scroll: no section #{id}");
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(section.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
