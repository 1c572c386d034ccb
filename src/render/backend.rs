use crate::assets::codec::encode_png;
use crate::foundation::core::{Canvas, Size};
use crate::foundation::error::{MyomError, MyomResult};
use crate::scene::model::Scene;

/// A captured raster as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl RasterImage {
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Encode as PNG. Empty or malformed buffers are reported as rasterization failures.
    pub fn encode_png(self) -> MyomResult<Vec<u8>> {
        let canvas = self.canvas();
        encode_png(canvas, self.data)
            .map_err(|e| MyomError::rasterization(format!("encode captured raster: {e}")))
    }
}

/// Paints a [`Scene`] into the host view.
///
/// Returns the measured size of the painted template box. A zero size means the view is not
/// mounted yet.
pub trait Renderer {
    fn paint(&mut self, scene: &Scene) -> MyomResult<Size>;
}

/// Captures the painted view into pixels.
///
/// `scale` multiplies the on-screen size of the view; the result is expected to be about
/// `scene.size * scale` pixels.
pub trait Rasterizer {
    fn rasterize(&mut self, scene: &Scene, scale: f64) -> MyomResult<RasterImage>;
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
