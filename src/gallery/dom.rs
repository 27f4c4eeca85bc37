use gloo_events::{EventListener, EventListenerOptions};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent};

use super::input::{intent_for_key, GalleryIntent, IntentSink};
use super::navigator::OverlayHost;
use super::state::ImageEntry;

/// Undoes one DOM side effect when dropped.
pub enum DomHandle {
    Listener(EventListener),
    ScrollLock(ScrollLock),
}

/// Restores the body's previous `overflow` value on drop.
pub struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let _ = self.body.style().set_property("overflow", &self.previous);
    }
}

/// Binds overlay side effects to the live document.
#[derive(Clone)]
pub struct DocumentHost {
    document: Document,
}

impl DocumentHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl OverlayHost for DocumentHost {
    type Handle = DomHandle;

    fn bind_keys(&self, sink: IntentSink) -> Option<DomHandle> {
        let options = EventListenerOptions::enable_prevent_default();
        let listener =
            EventListener::new_with_options(&self.document, "keydown", options, move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if let Some(intent) = intent_for_key(&event.key()) {
                    event.prevent_default();
                    sink(intent);
                }
            });
        Some(DomHandle::Listener(listener))
    }

    fn lock_scroll(&self) -> Option<DomHandle> {
        let body = self.document.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;
        Some(DomHandle::ScrollLock(ScrollLock { body, previous }))
    }
}

/// Images found on the page, in document order.
pub struct ImageScan {
    pub entries: Vec<ImageEntry>,
    elements: Vec<HtmlImageElement>,
}

impl ImageScan {
    /// Collects every element matching `selector`. Matches that are not
    /// `<img>` elements are skipped.
    pub fn collect(document: &Document, selector: &str) -> Self {
        let mut entries = Vec::new();
        let mut elements = Vec::new();

        let nodes = match document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(_) => {
                warn!("gallery: invalid image selector {selector:?}");
                return Self { entries, elements };
            }
        };

        for i in 0..nodes.length() {
            let Some(image) = nodes
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
            else {
                debug!("gallery: skipping non-image match at {i}");
                continue;
            };
            entries.push(entry_from_element(&image));
            elements.push(image);
        }

        Self { entries, elements }
    }

    /// Makes each scanned image open the gallery at its own index. The
    /// listeners stay bound for as long as the returned vector lives.
    pub fn bind_clicks(&self, sink: &IntentSink) -> Vec<EventListener> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let _ = image.style().set_property("cursor", "pointer");
                let sink = sink.clone();
                EventListener::new(image, "click", move |_| sink(GalleryIntent::Open(index)))
            })
            .collect()
    }
}

fn entry_from_element(image: &HtmlImageElement) -> ImageEntry {
    let element: &Element = image.as_ref();
    ImageEntry::new(image.src(), image.alt(), element.get_attribute("data-title"))
}
