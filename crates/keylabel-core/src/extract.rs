//! Two-pass label extraction.
//!
//! 1. [`retrieve_transforms`] lists the distinct transform keys on the page.
//! 2. [`retrieve_rects`] is called once per key. It counter-rotates the
//!    reference element and measures the labels of that key.
//!
//! Both passes take the same label snapshot. Returned indices are positions
//! in that snapshot, so a caller must not re-query the page between passes
//! if it wants indices that agree.
//!
//! The DOM is reached through [`LabelElement`] and [`ReferenceElement`], which
//! the WASM crate implements over `web-sys`.

use thiserror::Error;

use crate::rect::{IndexedRect, Rect};
use crate::transform::{counter_rotation, CounterRotation, InlineTransform, TransformKey};

/// Errors that can occur while extracting label rects.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A rotated key has no `rotate(<angle>deg)` term to invert.
    #[error("Transform has no rotate(<angle>deg) term: {transform}")]
    MissingRotation { transform: String },

    /// Writing the reference element's style failed.
    #[error("Reference element rejected style update: {0}")]
    Reference(String),
}

/// A key-label element.
pub trait LabelElement {
    /// Inline `transform` and `transform-origin` of the label's parent.
    fn parent_transform(&self) -> InlineTransform;

    /// Current bounding rect. Called after the reference element has been
    /// counter-rotated.
    fn bounding_rect(&self) -> Rect;
}

/// The element rotated to bring a group of labels upright.
pub trait ReferenceElement {
    /// Set inline `transform`, and `transform-origin` unless `origin` is
    /// `None`.
    fn set_rotation(
        &mut self,
        transform: &str,
        origin: Option<&str>,
    ) -> Result<(), ExtractError>;

    /// Remove the whole inline style attribute.
    fn clear_style(&mut self) -> Result<(), ExtractError>;
}

/// Labels of one transform key with their rects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformGroup {
    pub key: TransformKey,
    pub rects: Vec<IndexedRect>,
}

/// List the distinct transform keys of `labels`, in first-seen order.
pub fn retrieve_transforms<L: LabelElement>(labels: &[L]) -> Vec<TransformKey> {
    let mut keys: Vec<TransformKey> = Vec::new();
    for label in labels {
        let style = label.parent_transform();
        if !keys.iter().any(|key| key.matches(&style)) {
            keys.push(TransformKey::from_inline(&style));
        }
    }
    keys
}

/// Counter-rotate `reference` for `key`, then measure the labels of `key`.
///
/// Labels with an all-zero rect are skipped. The result is in snapshot
/// order. `key` is not checked against the enumerated set; a key no label
/// carries yields an empty result after the reference has been updated.
///
/// # Errors
///
/// Returns [`ExtractError::MissingRotation`] before touching the reference
/// if `key` has no rotation to invert, or [`ExtractError::Reference`] if
/// the style write fails.
pub fn retrieve_rects<L, R>(
    labels: &[L],
    reference: &mut R,
    key: &TransformKey,
) -> Result<Vec<IndexedRect>, ExtractError>
where
    L: LabelElement,
    R: ReferenceElement + ?Sized,
{
    match counter_rotation(key)? {
        CounterRotation::Clear => reference.clear_style()?,
        CounterRotation::Rotate { transform, origin } => {
            reference.set_rotation(&transform, origin.as_deref())?
        }
    }

    let rects = labels
        .iter()
        .enumerate()
        .filter(|(_, label)| key.matches(&label.parent_transform()))
        .map(|(index, label)| IndexedRect::new(index, label.bounding_rect()))
        .filter(|indexed| !indexed.rect.is_degenerate())
        .collect();
    Ok(rects)
}

/// Run both passes: enumerate keys, then extract each key's rects.
///
/// Groups follow key enumeration order. The reference element is left
/// counter-rotated for the last key.
pub fn scrape_groups<L, R>(
    labels: &[L],
    reference: &mut R,
) -> Result<Vec<TransformGroup>, ExtractError>
where
    L: LabelElement,
    R: ReferenceElement + ?Sized,
{
    retrieve_transforms(labels)
        .into_iter()
        .map(|key| {
            let rects = retrieve_rects(labels, &mut *reference, &key)?;
            Ok(TransformGroup { key, rects })
        })
        .collect()
}
