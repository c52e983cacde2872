//! Browser DOM implementations of the core element traits.

use keylabel_core::{ExtractError, InlineTransform, LabelElement, Rect, ReferenceElement};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, Node, SvgElement};

const TRANSFORM: &str = "transform";
const TRANSFORM_ORIGIN: &str = "transform-origin";

/// A key-label element found on the page.
pub(crate) struct DomLabel {
    element: Element,
}

impl DomLabel {
    pub(crate) fn new(element: Element) -> Self {
        Self { element }
    }
}

/// Inline style of an HTML or SVG element.
fn inline_style(node: &Node) -> Option<CssStyleDeclaration> {
    if let Some(element) = node.dyn_ref::<HtmlElement>() {
        return Some(element.style());
    }
    node.dyn_ref::<SvgElement>().map(SvgElement::style)
}

impl LabelElement for DomLabel {
    /// A parent without an inline style (document root, MathML or other
    /// foreign element) reads as having no transform.
    fn parent_transform(&self) -> InlineTransform {
        let Some(style) = self.element.parent_node().as_ref().and_then(inline_style) else {
            return InlineTransform::default();
        };
        InlineTransform::new(
            style.get_property_value(TRANSFORM).unwrap_or_default(),
            style.get_property_value(TRANSFORM_ORIGIN).unwrap_or_default(),
        )
    }

    fn bounding_rect(&self) -> Rect {
        let r = self.element.get_bounding_client_rect();
        Rect::new(r.top(), r.bottom(), r.left(), r.right())
    }
}

/// The element counter-rotated before measuring a group.
pub(crate) struct DomReference {
    element: HtmlElement,
}

fn style_error(err: JsValue) -> ExtractError {
    ExtractError::Reference(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl ReferenceElement for DomReference {
    /// Without an origin the element keeps whatever `transform-origin` it
    /// already had.
    fn set_rotation(
        &mut self,
        transform: &str,
        origin: Option<&str>,
    ) -> Result<(), ExtractError> {
        let style = self.element.style();
        style.set_property(TRANSFORM, transform).map_err(style_error)?;
        match origin {
            Some(origin) => style
                .set_property(TRANSFORM_ORIGIN, origin)
                .map_err(style_error),
            None => Ok(()),
        }
    }

    fn clear_style(&mut self) -> Result<(), ExtractError> {
        self.element.remove_attribute("style").map_err(style_error)
    }
}

pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

/// Snapshot every element matching `selector`, in document order.
pub(crate) fn query_labels(document: &Document, selector: &str) -> Result<Vec<DomLabel>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let labels = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(DomLabel::new)
        .collect();
    Ok(labels)
}

/// Find the reference element. Its absence is an error.
pub(crate) fn query_reference(document: &Document, selector: &str) -> Result<DomReference, JsValue> {
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("No element matches {selector}")))?;
    let element = element
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("{selector} is not an HTML element")))?;
    Ok(DomReference { element })
}
