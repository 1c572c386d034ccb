//! Pointer drag state. The container is resolved once when the drag starts and reused for every
//! move event.

use crate::document::model::OverlayId;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{MyomError, MyomResult};
use crate::transform::background::pan_focal;
use crate::transform::normalized::pointer_to_normalized_in;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragTarget {
    /// Reposition an overlay by its center.
    Overlay(OverlayId),
    /// Pan the background image by moving its focal point.
    Background {
        start_pointer: Point,
        start_focal: Point,
        /// Image placement at drag start, in container pixels.
        placement: Rect,
    },
}

/// An in-progress single-pointer drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    target: DragTarget,
    container: Rect,
}

impl DragSession {
    /// Start a drag inside `container` (template box in pointer coordinates).
    pub fn begin(target: DragTarget, container: Rect) -> MyomResult<Self> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(container.width()) || !ok(container.height()) {
            return Err(MyomError::not_ready(format!(
                "drag container has no size ({}x{})",
                container.width(),
                container.height()
            )));
        }
        Ok(Self { target, container })
    }

    pub fn target(&self) -> DragTarget {
        self.target
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Normalized position for the pointer; overlay drags use this as the new center.
    pub fn normalized(&self, pointer: Point) -> Point {
        pointer_to_normalized_in(pointer, self.container)
    }

    /// New focal point for a background drag, or `None` for overlay drags.
    pub fn focal(&self, pointer: Point) -> Option<Point> {
        match self.target {
            DragTarget::Background {
                start_pointer,
                start_focal,
                placement,
            } => Some(pan_focal(start_focal, pointer - start_pointer, placement)),
            DragTarget::Overlay(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/drag.rs"]
mod tests;
