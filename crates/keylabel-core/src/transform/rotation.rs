//! Counter-rotation of the reference element.
//!
//! Labels are measured in the frame of the reference element. Rotating the
//! reference by the inverse of a group's angle, around the same origin,
//! brings that group's labels back upright so their bounding rects describe
//! the un-rotated label.
//!
//! Only the angle is inverted. The origin is passed through and any other
//! transform function in the key is ignored.

use std::sync::OnceLock;

use regex::Regex;

use super::{TransformKey, SEPARATOR};
use crate::extract::ExtractError;

/// What to do to the reference element before measuring a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterRotation {
    /// Remove the reference element's inline style entirely.
    Clear,
    /// Set the reference element's inline `transform`, and its
    /// `transform-origin` when one is given.
    Rotate {
        transform: String,
        origin: Option<String>,
    },
}

fn rotate_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Greedy: with several `deg)` terms the capture runs to the last one.
    RE.get_or_init(|| Regex::new(r"rotate\((.*)deg\)").expect("valid regex"))
}

/// Extract the degree text of the first `rotate(<...>deg)` in a transform.
///
/// The text is returned as written (`"30"`, `"-15.5"`), not parsed as a
/// number.
pub fn rotation_degrees(transform: &str) -> Option<&str> {
    rotate_pattern()
        .captures(transform)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Flip the sign of a degree string.
///
/// A leading `-` is stripped, otherwise one is prepended. `"0"` becomes
/// `"-0"`, which browsers treat as zero.
pub fn inverse_degrees(degrees: &str) -> String {
    match degrees.strip_prefix('-') {
        Some(positive) => positive.to_string(),
        None => format!("-{degrees}"),
    }
}

/// Compute the style change that un-rotates the labels of `key`.
///
/// # Errors
///
/// Returns [`ExtractError::MissingRotation`] if a rotated key has no
/// `rotate(<...>deg)` term. Keys produced by the enumerator from a page
/// that only rotates labels always have one.
pub fn counter_rotation(key: &TransformKey) -> Result<CounterRotation, ExtractError> {
    match key {
        TransformKey::Nop => Ok(CounterRotation::Clear),
        TransformKey::Rotated { transform, origin } => {
            inverse_rotation(transform, Some(origin.as_str()))
        }
        TransformKey::Unmatched(text) => {
            // Same split as the legacy driver: first segment, then second
            let mut parts = text.split(SEPARATOR);
            let transform = parts.next().unwrap_or_default();
            inverse_rotation(transform, parts.next())
        }
    }
}

fn inverse_rotation(transform: &str, origin: Option<&str>) -> Result<CounterRotation, ExtractError> {
    let degrees = rotation_degrees(transform).ok_or_else(|| ExtractError::MissingRotation {
        transform: transform.to_string(),
    })?;
    Ok(CounterRotation::Rotate {
        transform: format!("rotate({}deg)", inverse_degrees(degrees)),
        origin: origin.map(str::to_string),
    })
}
