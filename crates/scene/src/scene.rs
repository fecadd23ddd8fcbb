//! The scene: what to draw and at what resolution.

use crate::element::Element;
use crate::lenient;
use common::ViewBox;
use serde::Deserialize;

/// A scene to rasterize.
///
/// The scene is read-only while rendering; elements are drawn in order, later
/// elements compositing over earlier ones.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Scene {
    /// Logical coordinate system.
    #[serde(rename = "viewBox", deserialize_with = "lenient::view_box")]
    pub view_box: ViewBox,
    /// Output width in device pixels.
    #[serde(deserialize_with = "lenient::dimension")]
    pub width: u32,
    /// Output height in device pixels.
    #[serde(deserialize_with = "lenient::dimension")]
    pub height: u32,
    /// Elements in paint order.
    #[serde(default, deserialize_with = "lenient::elements")]
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(view_box: ViewBox, width: u32, height: u32) -> Self {
        Self {
            view_box,
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Append an element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Append an element, builder style.
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Get all elements.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Get number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
