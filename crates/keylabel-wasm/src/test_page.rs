//! Layout page used by the in-browser tests.
//!
//! Run them with `wasm-pack test --headless --chrome crates/keylabel-wasm`.

use keylabel_core::IndexedRect;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::extract::{retrieve_rects, retrieve_transforms};

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Build a fresh `#screen_rotate` holding four key labels:
/// labels 0 and 1 share `rotate(10deg)` / `10px 20px`, label 2 is upright,
/// label 3 is upright but not rendered.
pub fn build() -> Element {
    let doc = document();
    if let Some(old) = doc.get_element_by_id("screen_rotate") {
        old.remove();
    }

    let screen = doc.create_element("div").unwrap();
    screen.set_id("screen_rotate");
    screen
        .set_attribute("style", "position: absolute; top: 0; left: 0")
        .unwrap();

    let key = |parent_style: &str| {
        let keycap = doc.create_element("div").unwrap();
        if !parent_style.is_empty() {
            keycap.set_attribute("style", parent_style).unwrap();
        }
        let label = doc.create_element("div").unwrap();
        label.set_class_name("keylabels");
        label
            .set_attribute("style", "width: 40px; height: 20px")
            .unwrap();
        label.set_text_content(Some("Q"));
        keycap.append_child(&label).unwrap();
        screen.append_child(&keycap).unwrap();
        label
    };

    let rotated = "transform: rotate(10deg); transform-origin: 10px 20px";
    key(rotated);
    key(rotated);
    key("");
    key("").set_attribute("style", "display: none").unwrap();

    doc.body().unwrap().append_child(&screen).unwrap();
    screen
}

pub fn transforms(options: JsValue) -> Vec<String> {
    serde_wasm_bindgen::from_value(retrieve_transforms(options).unwrap()).unwrap()
}

pub fn rects(key: &str) -> Vec<IndexedRect> {
    serde_wasm_bindgen::from_value(retrieve_rects(key, JsValue::UNDEFINED).unwrap()).unwrap()
}
