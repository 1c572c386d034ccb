//! Background image placement driven by a zoom factor and a normalized focal point.

use crate::foundation::core::{Point, Rect, Size, Vec2};
use crate::transform::normalized::clamp_normalized;

/// Smallest accepted background zoom.
pub const MIN_IMAGE_ZOOM: f64 = 0.5;
/// Largest accepted background zoom.
pub const MAX_IMAGE_ZOOM: f64 = 2.0;

/// Clamp a background zoom factor to `[MIN_IMAGE_ZOOM, MAX_IMAGE_ZOOM]`. NaN maps to `1`.
#[inline]
pub fn clamp_image_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        1.0
    } else {
        zoom.clamp(MIN_IMAGE_ZOOM, MAX_IMAGE_ZOOM)
    }
}

/// Rectangle (in container pixels) the background image is drawn into.
///
/// The image is cover-fitted to the container, multiplied by `zoom`, then positioned so that the
/// image point at fraction `focal` of its width/height sits at the container center.
pub fn background_placement(container: Size, image: Size, zoom: f64, focal: Point) -> Rect {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Rect::from_origin_size(Point::ORIGIN, container);
    }
    let cover = (container.width / image.width).max(container.height / image.height);
    let s = cover * clamp_image_zoom(zoom);
    let draw = Size::new(image.width * s, image.height * s);
    let focal = clamp_normalized(focal);
    let origin = Point::new(
        container.width * 0.5 - focal.x * draw.width,
        container.height * 0.5 - focal.y * draw.height,
    );
    Rect::from_origin_size(origin, draw)
}

/// Move the focal point by a pointer drag of `delta` pixels over an image drawn at `placement`.
///
/// Dragging right reveals more of the image's left side, so the focal point moves against the
/// pointer. The result stays in `[0, 1]`.
pub fn pan_focal(focal: Point, delta: Vec2, placement: Rect) -> Point {
    let w = placement.width();
    let h = placement.height();
    let dx = if w > 0.0 { delta.x / w } else { 0.0 };
    let dy = if h > 0.0 { delta.y / h } else { 0.0 };
    clamp_normalized(Point::new(focal.x - dx, focal.y - dy))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/background.rs"]
mod tests;
