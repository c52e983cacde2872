//! Label extraction WASM bindings.
//!
//! These are the two entry points a page driver calls:
//!
//! ```typescript
//! const keys = retrieveTransforms();
//! for (const key of keys) {
//!   const rects = retrieveRects(key);  // [[index, {top, bottom, left, right, width, height}], ...]
//!   // capture the viewport, crop each rect
//! }
//! ```
//!
//! Keys are exchanged in the `transform + "\n" + origin` / `"nop"` string
//! form. Both functions accept an optional selectors object, e.g.
//! `{ label_selector: ".keylabels", reference_selector: "#screen_rotate" }`.
//!
//! Each call queries the page afresh. Indices from `retrieveRects` agree with
//! the order `retrieveTransforms` saw only while the page is left unchanged
//! between the calls.

use keylabel_core::extract;
use keylabel_core::{Selectors, TransformKey};
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::log;

fn selectors_from(options: JsValue) -> Result<Selectors, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(Selectors::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid selectors: {}", e)))
}

/// List the distinct transform keys of the page's labels, first-seen order.
///
/// # Returns
/// Array of key strings.
#[wasm_bindgen(js_name = retrieveTransforms)]
pub fn retrieve_transforms(options: JsValue) -> Result<JsValue, JsValue> {
    let selectors = selectors_from(options)?;
    let document = dom::document()?;
    let labels = dom::query_labels(&document, &selectors.label_selector)?;

    let keys = extract::retrieve_transforms(&labels);
    log::debug(&format!(
        "retrieveTransforms: {} labels, {} transforms",
        labels.len(),
        keys.len()
    ));

    serde_wasm_bindgen::to_value(&keys).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Counter-rotate the reference element for `key` and measure its labels.
///
/// For `"nop"` the reference element's style attribute is removed. Otherwise
/// its transform becomes the inverse rotation of `key` around the same
/// origin.
///
/// # Returns
/// Array of `[index, rect]` pairs in document order, skipping labels whose
/// rect is all zero.
///
/// # Errors
/// Throws if `key` has no `rotate(<angle>deg)` term, if the reference
/// element is missing, or if the selectors object is malformed.
#[wasm_bindgen(js_name = retrieveRects)]
pub fn retrieve_rects(key: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let selectors = selectors_from(options)?;
    let key = TransformKey::from(key.to_string());
    let document = dom::document()?;
    let mut reference = dom::query_reference(&document, &selectors.reference_selector)?;
    let labels = dom::query_labels(&document, &selectors.label_selector)?;

    let rects = extract::retrieve_rects(&labels, &mut reference, &key)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::debug(&format!(
        "retrieveRects [{}]: {} of {} labels",
        log::key_label(&key),
        rects.len(),
        labels.len()
    ));

    serde_wasm_bindgen::to_value(&rects).map_err(|e| JsValue::from_str(&e.to_string()))
}
