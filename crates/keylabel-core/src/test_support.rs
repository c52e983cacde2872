//! In-memory page used by the unit tests.
//!
//! Labels share the reference element's style through an `Rc`, so a label
//! can record (and react to) the reference rotation in effect when it is
//! measured.

use std::cell::RefCell;
use std::rc::Rc;

use crate::extract::{ExtractError, LabelElement, ReferenceElement};
use crate::rect::Rect;
use crate::transform::InlineTransform;

/// Inline style state of the fake reference element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceStyle {
    /// No style attribute.
    Absent,
    Rotated { transform: String, origin: String },
}

impl ReferenceStyle {
    pub fn rotated(transform: &str, origin: &str) -> Self {
        ReferenceStyle::Rotated {
            transform: transform.to_string(),
            origin: origin.to_string(),
        }
    }
}

pub struct FakeReference {
    style: Rc<RefCell<ReferenceStyle>>,
    reject_writes: bool,
}

impl FakeReference {
    pub fn new() -> Self {
        Self {
            style: Rc::new(RefCell::new(ReferenceStyle::Absent)),
            reject_writes: false,
        }
    }

    /// Make every style write fail.
    pub fn rejecting_writes(mut self) -> Self {
        self.reject_writes = true;
        self
    }

    pub fn style(&self) -> ReferenceStyle {
        self.style.borrow().clone()
    }

    fn write(&mut self, style: ReferenceStyle) -> Result<(), ExtractError> {
        if self.reject_writes {
            return Err(ExtractError::Reference("read-only element".to_string()));
        }
        *self.style.borrow_mut() = style;
        Ok(())
    }
}

impl ReferenceElement for FakeReference {
    fn set_rotation(
        &mut self,
        transform: &str,
        origin: Option<&str>,
    ) -> Result<(), ExtractError> {
        let origin = match (origin, self.style()) {
            (Some(origin), _) => origin.to_string(),
            (None, ReferenceStyle::Rotated { origin, .. }) => origin,
            (None, ReferenceStyle::Absent) => String::new(),
        };
        self.write(ReferenceStyle::rotated(transform, &origin))
    }

    fn clear_style(&mut self) -> Result<(), ExtractError> {
        self.write(ReferenceStyle::Absent)
    }
}

pub struct FakeLabel {
    parent: InlineTransform,
    rect: Rect,
    upright: Option<(String, Rect)>,
    reference: Rc<RefCell<ReferenceStyle>>,
    measured: RefCell<Vec<ReferenceStyle>>,
}

impl FakeLabel {
    pub fn new(reference: &FakeReference, transform: &str, origin: &str, rect: Rect) -> Self {
        Self {
            parent: InlineTransform::new(transform, origin),
            rect,
            upright: None,
            reference: Rc::clone(&reference.style),
            measured: RefCell::new(Vec::new()),
        }
    }

    /// Report `rect` instead while the reference carries `transform`.
    pub fn upright_when(mut self, transform: &str, rect: Rect) -> Self {
        self.upright = Some((transform.to_string(), rect));
        self
    }

    /// Reference styles seen at each measurement, oldest first.
    pub fn measurements(&self) -> Vec<ReferenceStyle> {
        self.measured.borrow().clone()
    }
}

impl LabelElement for FakeLabel {
    fn parent_transform(&self) -> InlineTransform {
        self.parent.clone()
    }

    fn bounding_rect(&self) -> Rect {
        let current = self.reference.borrow().clone();
        let rect = match (&self.upright, &current) {
            (Some((upright, rect)), ReferenceStyle::Rotated { transform, .. })
                if upright == transform =>
            {
                *rect
            }
            _ => self.rect,
        };
        self.measured.borrow_mut().push(current);
        rect
    }
}
