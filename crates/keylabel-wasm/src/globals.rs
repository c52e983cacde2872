//! Legacy `window` globals.
//!
//! Older drivers evaluate `window.retrieveTransforms()` and
//! `window.retrieveRects(key)` in the page instead of importing the module.
//! [`install_globals`] attaches both under those names, using the default
//! selectors.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;

use crate::extract::{retrieve_rects, retrieve_transforms};
use crate::log;

/// Attach `retrieveTransforms` and `retrieveRects` to `window`.
///
/// Calling this again replaces the previous functions.
#[wasm_bindgen(js_name = installGlobals)]
pub fn install_globals() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;

    let transforms = Closure::<dyn Fn() -> Result<JsValue, JsValue>>::new(|| {
        retrieve_transforms(JsValue::UNDEFINED)
    });
    Reflect::set(
        &window,
        &JsValue::from_str("retrieveTransforms"),
        transforms.as_ref(),
    )?;
    // The page owns the function from now on
    transforms.forget();

    let rects = Closure::<dyn Fn(String) -> Result<JsValue, JsValue>>::new(|key: String| {
        retrieve_rects(&key, JsValue::UNDEFINED)
    });
    Reflect::set(&window, &JsValue::from_str("retrieveRects"), rects.as_ref())?;
    rects.forget();

    log::debug("installed window.retrieveTransforms and window.retrieveRects");
    Ok(())
}
