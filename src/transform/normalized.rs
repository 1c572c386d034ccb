//! Mapping between pointer pixels and normalized `[0, 1]` container coordinates.

use crate::foundation::core::{Point, Rect, Size};

/// Clamp scalar value to normalized range `[0, 1]`. NaN maps to `0`.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Clamp both coordinates of `p` to `[0, 1]`.
#[inline]
pub fn clamp_normalized(p: Point) -> Point {
    Point::new(clamp01(p.x), clamp01(p.y))
}

/// Convert a pointer position to a normalized position inside a container.
///
/// Pointers outside the container pin to the nearest edge.
pub fn pointer_to_normalized(pointer: Point, origin: Point, size: Size) -> Point {
    Point::new(
        clamp01((pointer.x - origin.x) / size.width),
        clamp01((pointer.y - origin.y) / size.height),
    )
}

/// [`pointer_to_normalized`] against a container rectangle.
pub fn pointer_to_normalized_in(pointer: Point, container: Rect) -> Point {
    pointer_to_normalized(pointer, container.origin(), container.size())
}

/// Pixel position of the center of an element at normalized position `p`.
///
/// The renderer offsets by half of the element's own box to center it on this point.
#[inline]
pub fn normalized_to_pixel(p: Point, size: Size) -> Point {
    Point::new(p.x * size.width, p.y * size.height)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/normalized.rs"]
mod tests;
