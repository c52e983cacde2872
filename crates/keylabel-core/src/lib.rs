//! Keylabel Core - rotated key-label geometry
//!
//! This crate groups the key labels of a rendered keyboard layout by the
//! rotation their parent applies, and extracts un-rotated label rects one
//! group at a time by counter-rotating a reference element.
//!
//! The page is reached through the [`LabelElement`] and [`ReferenceElement`]
//! traits; the WASM crate implements them over the browser DOM.

pub mod crop;
pub mod extract;
pub mod rect;
pub mod selectors;
pub mod transform;

#[cfg(test)]
mod test_support;

pub use crop::{crop_label, crop_label_png, crop_labels, CropError};
pub use extract::{
    retrieve_rects, retrieve_transforms, scrape_groups, ExtractError, LabelElement,
    ReferenceElement, TransformGroup,
};
pub use rect::{IndexedRect, Rect};
pub use selectors::Selectors;
pub use transform::{counter_rotation, CounterRotation, InlineTransform, TransformKey};
