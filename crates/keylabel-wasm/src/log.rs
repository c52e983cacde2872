//! Debug logging to the browser console.

use keylabel_core::TransformKey;
use wasm_bindgen::JsValue;

pub(crate) fn debug(message: &str) {
    web_sys::console::debug_1(&JsValue::from_str(message));
}

/// Single-line form of a key for log output.
pub(crate) fn key_label(key: &TransformKey) -> String {
    match key {
        TransformKey::Nop => "nop".to_string(),
        TransformKey::Rotated { transform, origin } if origin.is_empty() => transform.clone(),
        TransformKey::Rotated { transform, origin } => format!("{transform} @ {origin}"),
        TransformKey::Unmatched(text) => format!("{text:?}"),
    }
}
