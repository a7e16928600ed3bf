//! `ClassList` / `InlineStyle` over real document elements.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{MountError, describe};
use crate::surface::{ClassList, InlineStyle};

#[derive(Debug, Clone)]
pub struct DomNode {
    el: Element,
}

impl DomNode {
    #[must_use]
    pub fn new(el: Element) -> Self {
        Self { el }
    }

    #[must_use]
    pub fn element(&self) -> &Element {
        &self.el
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.el.get_attribute(name)
    }

    pub fn set_text(&self, text: &str) {
        self.el.set_text_content(Some(text));
    }
}

impl ClassList for DomNode {
    fn add_class(&mut self, name: &str) {
        if let Err(err) = self.el.class_list().add_1(name) {
            log::warn!("add class {name}: {}", describe(&err));
        }
    }

    fn remove_class(&mut self, name: &str) {
        if let Err(err) = self.el.class_list().remove_1(name) {
            log::warn!("remove class {name}: {}", describe(&err));
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.el.class_list().contains(name)
    }
}

impl InlineStyle for DomNode {
    fn set_style(&mut self, property: &str, value: &str) {
        // SVG and other non-HTML elements have no inline style declaration here.
        let Some(html) = self.el.dyn_ref::<HtmlElement>() else {
            log::debug!("skip style {property} on non-HTML element <{}>", self.el.tag_name());
            return;
        };
        if let Err(err) = html.style().set_property(property, value) {
            log::warn!("set style {property}: {}", describe(&err));
        }
    }
}

/// First element matching `selector` in the document.
///
/// # Errors
///
/// Returns [`MountError::Js`] when the selector is invalid.
pub(crate) fn query(document: &Document, selector: &str) -> Result<Option<DomNode>, MountError> {
    document
        .query_selector(selector)
        .map(|found| found.map(DomNode::new))
        .map_err(|err| MountError::js("querySelector", &err))
}

/// First element matching `selector` below `scope`.
pub(crate) fn query_within(scope: &Element, selector: &str) -> Result<Option<DomNode>, MountError> {
    scope
        .query_selector(selector)
        .map(|found| found.map(DomNode::new))
        .map_err(|err| MountError::js("querySelector", &err))
}

/// Every element matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<DomNode>, MountError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| MountError::js("querySelectorAll", &err))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .map(DomNode::new)
        .collect())
}
