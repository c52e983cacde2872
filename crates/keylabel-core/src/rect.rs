//! Viewport rectangles measured from label elements.

use serde::{Deserialize, Serialize};

/// A bounding rectangle in viewport pixel coordinates.
///
/// Mirrors the edges of a DOM `getBoundingClientRect()` result. Width and
/// height are derived from the edges rather than stored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Rect {
    /// Create a rect from its four edges.
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Horizontal extent (`right - left`).
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent (`bottom - top`).
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// True when all four edges are exactly zero.
    ///
    /// Browsers report this for elements that are not rendered (detached or
    /// `display: none`), so such labels carry no usable geometry.
    pub fn is_degenerate(&self) -> bool {
        self.top == 0.0 && self.bottom == 0.0 && self.left == 0.0 && self.right == 0.0
    }
}

/// Wire shape of a rect: the four edges plus the derived size, matching the
/// fields of a DOM rect that callers read back.
#[derive(Serialize, Deserialize)]
struct RectRepr {
    top: f64,
    bottom: f64,
    left: f64,
    right: f64,
    #[serde(default, skip_deserializing)]
    width: f64,
    #[serde(default, skip_deserializing)]
    height: f64,
}

impl Serialize for Rect {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RectRepr {
            top: self.top,
            bottom: self.bottom,
            left: self.left,
            right: self.right,
            width: self.width(),
            height: self.height(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rect {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = RectRepr::deserialize(deserializer)?;
        Ok(Rect::new(repr.top, repr.bottom, repr.left, repr.right))
    }
}

/// A label's page-wide index paired with its measured rect.
///
/// The index is the label's position in the snapshot both passes were run
/// over. It serializes as a two-element `[index, rect]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "(usize, Rect)", from = "(usize, Rect)")]
pub struct IndexedRect {
    pub index: usize,
    pub rect: Rect,
}

impl IndexedRect {
    pub fn new(index: usize, rect: Rect) -> Self {
        Self { index, rect }
    }
}

impl From<IndexedRect> for (usize, Rect) {
    fn from(value: IndexedRect) -> Self {
        (value.index, value.rect)
    }
}

impl From<(usize, Rect)> for IndexedRect {
    fn from((index, rect): (usize, Rect)) -> Self {
        Self { index, rect }
    }
}
