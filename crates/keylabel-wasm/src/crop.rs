//! Label cropping WASM bindings.

use keylabel_core::{crop, Rect};
use wasm_bindgen::prelude::*;

/// Crop one label out of a viewport capture and encode it as PNG.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Capture width in pixels
/// * `height` - Capture height in pixels
/// * `rect` - A rect as returned by `retrieveRects`: `{top, bottom, left, right}`
///
/// # Example (TypeScript)
/// ```typescript
/// for (const [index, rect] of retrieveRects(key)) {
///   const png = cropLabelPng(capture, 1600, 800, rect);
///   labels.set(index, png);
/// }
/// ```
#[wasm_bindgen(js_name = cropLabelPng)]
pub fn crop_label_png(
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    rect: JsValue,
) -> Result<Vec<u8>, JsValue> {
    let rect: Rect = serde_wasm_bindgen::from_value(rect)
        .map_err(|e| JsValue::from_str(&format!("Invalid rect: {}", e)))?;
    crop::crop_label_png(pixels, width, height, &rect).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// WASM-specific tests that require JsValue.
///
/// These can only run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::extract::retrieve_rects;
    use crate::test_page;
    use js_sys::Array;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[wasm_bindgen_test]
    fn test_crop_rect_from_retrieve_rects() {
        test_page::build();
        let pairs = Array::from(&retrieve_rects("nop", JsValue::UNDEFINED).unwrap());
        assert_eq!(pairs.length(), 1);

        // Passed through untouched, width/height included
        let js_rect = Array::from(&pairs.get(0)).get(1);
        let rect: Rect = serde_wasm_bindgen::from_value(js_rect.clone()).unwrap();
        let width = rect.right.ceil() as u32 + 1;
        let height = rect.bottom.ceil() as u32 + 1;
        let pixels = vec![200u8; (width * height * 4) as usize];

        let png = crop_label_png(pixels, width, height, js_rect).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[wasm_bindgen_test]
    fn test_crop_rect_object_literal() {
        let rect = serde_wasm_bindgen::to_value(&Rect::new(2.0, 10.0, 4.0, 12.0)).unwrap();
        let png = crop_label_png(vec![0u8; 16 * 16 * 4], 16, 16, rect).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[wasm_bindgen_test]
    fn test_malformed_rect_throws() {
        let pixels = vec![0u8; 16 * 16 * 4];
        let err = crop_label_png(pixels, 16, 16, JsValue::from_str("top: 0")).unwrap_err();
        assert!(err.as_string().unwrap().starts_with("Invalid rect"));
    }

    #[wasm_bindgen_test]
    fn test_rect_outside_capture_throws() {
        let rect = serde_wasm_bindgen::to_value(&Rect::new(40.0, 50.0, 40.0, 50.0)).unwrap();
        assert!(crop_label_png(vec![0u8; 16 * 16 * 4], 16, 16, rect).is_err());
    }
}
