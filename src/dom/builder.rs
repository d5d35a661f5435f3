// ============================================================================
// ELEMENT BUILDER - Chained construction of the console's elements
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element, set_attribute, set_class_name, set_text_content};

/// Attribute the views key list items and gallery slots by
pub const DATA_KEY: &str = "data-key";

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Bootstrap class list; replaces whatever was set before
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        self.attr("id", id)
    }

    /// Replaces the text content, children included
    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    /// Text node appended after the current children
    pub fn trailing_text(self, text: &str) -> Result<Self, JsValue> {
        self.element.append_with_str_1(text)?;
        Ok(self)
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    pub fn attrs(self, pairs: &[(&str, &str)]) -> Result<Self, JsValue> {
        pairs
            .iter()
            .try_fold(self, |builder, (name, value)| builder.attr(name, value))
    }

    /// Stable identity across renders (product id, gallery index)
    pub fn data_key(self, key: &str) -> Result<Self, JsValue> {
        self.attr(DATA_KEY, key)
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn children<I>(self, children: I) -> Result<Self, JsValue>
    where
        I: IntoIterator<Item = Element>,
    {
        children.into_iter().try_fold(self, Self::child)
    }

    pub fn build(self) -> Element {
        self.element
    }
}
