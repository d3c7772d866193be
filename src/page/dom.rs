//! [`Page`] implementation over the live `web_sys::Document`.
//!
//! DOM failures here are cosmetic: a rejected class or text update leaves the
//! previous rendering in place and is logged at debug level.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use super::{ButtonView, FAV_BUTTON_ATTR, FAV_COUNT_ATTR, FAV_SLUG_ATTR, Page};

/// Browser page bound to the current window and document.
#[derive(Clone, Debug)]
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    /// Bind to the current window. Returns `None` outside a document context
    /// (e.g. a worker).
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// All elements matching `selector`, in document order.
    pub fn elements(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            log::debug!("invalid selector {selector}");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| match node.dyn_into::<Element>() {
                Ok(el) => Some(el),
                Err(node) => {
                    log::debug!("skipping non-element node {}", node.node_name());
                    None
                }
            })
            .collect()
    }
}

fn apply_button_view(button: &Element, view: ButtonView) {
    let classes = button.class_list();
    if classes.add_1(view.class_on()).is_err() || classes.remove_1(view.class_off()).is_err() {
        log::debug!("favorite button class update rejected");
    }
    button.set_inner_html(view.label());
}

impl Page for BrowserPage {
    fn set_text_by_id(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_favorite_counts(&self, count: usize) {
        let text = count.to_string();
        for el in self.elements(&format!("[{FAV_COUNT_ATTR}]")) {
            el.set_text_content(Some(&text));
        }
    }

    fn for_each_favorite_button(&self, view: &mut dyn FnMut(Option<&str>) -> ButtonView) {
        for button in self.elements(&format!("[{FAV_BUTTON_ATTR}]")) {
            let slug = button.get_attribute(FAV_SLUG_ATTR);
            apply_button_view(&button, view(slug.as_deref()));
        }
    }

    fn alert(&self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            log::warn!("alert suppressed: {message}");
        }
    }

    fn navigate(&self, url: &str) {
        if self.window.location().set_href(url).is_err() {
            log::warn!("navigation to {url} rejected");
        }
    }
}
