//! Transform keys: the identity used to group labels by rotation.
//!
//! A label inherits its rotation from its parent's inline style, so the key
//! is derived from the parent's `transform` and `transform-origin`. Labels
//! whose parent carries no inline transform share the [`TransformKey::Nop`]
//! key.
//!
//! # Legacy Encoding
//!
//! Drivers exchange keys as plain strings:
//! - `Nop` is `"nop"`
//! - `Rotated` is `transform + "\n" + origin`
//!
//! [`TransformKey`] implements `Display`/`FromStr` and serde in that
//! encoding. Two keys are equal exactly when their encodings are equal.
//! Strings that are neither `"nop"` nor split into exactly two parts decode
//! to [`TransformKey::Unmatched`], which keeps the text verbatim and never
//! matches a label.

mod rotation;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use rotation::{counter_rotation, inverse_degrees, rotation_degrees, CounterRotation};

/// Encoding of [`TransformKey::Nop`].
pub const NOP: &str = "nop";

/// Separator between transform and origin in the legacy encoding.
const SEPARATOR: char = '\n';

/// Inline `transform` and `transform-origin` values as read from an element's
/// style attribute. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineTransform {
    pub transform: String,
    pub origin: String,
}

impl InlineTransform {
    pub fn new(transform: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            transform: transform.into(),
            origin: origin.into(),
        }
    }
}

/// Grouping key for labels sharing the same parent rotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TransformKey {
    /// Parent has no inline transform.
    #[default]
    Nop,
    /// Parent has a non-empty inline transform. The origin is kept verbatim
    /// and may be empty.
    Rotated { transform: String, origin: String },
    /// Decoded text with no separator or more than one. No label derives
    /// such a key.
    Unmatched(String),
}

impl TransformKey {
    /// Derive the key for a label from its parent's inline style.
    ///
    /// An empty `transform` yields `Nop` regardless of the origin.
    pub fn from_inline(style: &InlineTransform) -> Self {
        if style.transform.is_empty() {
            TransformKey::Nop
        } else {
            TransformKey::Rotated {
                transform: style.transform.clone(),
                origin: style.origin.clone(),
            }
        }
    }

    pub fn rotated(transform: impl Into<String>, origin: impl Into<String>) -> Self {
        TransformKey::Rotated {
            transform: transform.into(),
            origin: origin.into(),
        }
    }

    pub fn is_nop(&self) -> bool {
        matches!(self, TransformKey::Nop)
    }

    /// Compare against an inline style without allocating a key for it.
    pub fn matches(&self, style: &InlineTransform) -> bool {
        match self {
            TransformKey::Nop => style.transform.is_empty(),
            TransformKey::Rotated { transform, origin } => {
                !style.transform.is_empty()
                    && *transform == style.transform
                    && *origin == style.origin
            }
            TransformKey::Unmatched(_) => false,
        }
    }
}

impl fmt::Display for TransformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformKey::Nop => f.write_str(NOP),
            TransformKey::Rotated { transform, origin } => {
                write!(f, "{transform}{SEPARATOR}{origin}")
            }
            TransformKey::Unmatched(text) => f.write_str(text),
        }
    }
}

impl FromStr for TransformKey {
    type Err = Infallible;

    /// Decode the legacy encoding.
    ///
    /// Decoding then re-encoding returns the input unchanged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NOP {
            return Ok(TransformKey::Nop);
        }
        let key = match s.split_once(SEPARATOR) {
            Some((transform, origin)) if !origin.contains(SEPARATOR) => {
                TransformKey::rotated(transform, origin)
            }
            _ => TransformKey::Unmatched(s.to_string()),
        };
        Ok(key)
    }
}

impl From<String> for TransformKey {
    fn from(value: String) -> Self {
        match value.parse::<TransformKey>() {
            Ok(key) => key,
            Err(never) => match never {},
        }
    }
}

impl From<TransformKey> for String {
    fn from(value: TransformKey) -> Self {
        value.to_string()
    }
}
