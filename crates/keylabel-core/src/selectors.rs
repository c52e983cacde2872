//! Page selectors for the label and reference elements.

use serde::{Deserialize, Serialize};

/// Selector matching every key-label element on the page.
pub const LABEL_SELECTOR: &str = ".keylabels";

/// Selector matching the element that is counter-rotated before measuring.
pub const REFERENCE_SELECTOR: &str = "#screen_rotate";

/// Where to find labels and the reference element.
///
/// Missing fields fall back to the layout page's defaults, so callers may
/// pass a partial object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectors {
    /// CSS selector for label elements
    #[serde(default = "default_label_selector")]
    pub label_selector: String,
    /// CSS selector for the reference element
    #[serde(default = "default_reference_selector")]
    pub reference_selector: String,
}

fn default_label_selector() -> String {
    LABEL_SELECTOR.to_string()
}

fn default_reference_selector() -> String {
    REFERENCE_SELECTOR.to_string()
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            label_selector: default_label_selector(),
            reference_selector: default_reference_selector(),
        }
    }
}
