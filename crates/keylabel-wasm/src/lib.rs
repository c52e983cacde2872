//! Keylabel WASM - WebAssembly bindings for Keylabel
//!
//! This crate runs inside the rendered layout page and exposes the
//! keylabel-core extraction to the driver that controls the page.
//!
//! # Module Structure
//!
//! - `dom` - `web-sys` implementations of the label and reference elements
//! - `extract` - `retrieveTransforms` / `retrieveRects` entry points
//! - `globals` - optional `window` attachment under the legacy names
//! - `crop` - cropping labels out of a viewport capture
//!
//! # Usage
//!
//! ```typescript
//! import init, { retrieveTransforms, retrieveRects } from '@keylabel/wasm';
//!
//! await init();
//!
//! for (const key of retrieveTransforms()) {
//!   const rects = retrieveRects(key);
//!   console.log(`${rects.length} labels for ${JSON.stringify(key)}`);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod dom;
mod extract;
mod globals;
mod log;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_page;

pub use crop::crop_label_png;
pub use extract::{retrieve_rects, retrieve_transforms};
pub use globals::install_globals;

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    log::debug(&format!("keylabel-wasm {} loaded", version()));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
