use std::fmt;
use std::sync::Arc;

use crate::assets::codec::{encode_png, probe_image};
use crate::foundation::core::{Canvas, Size};
use crate::foundation::error::MyomResult;

/// Opaque, cheaply clonable reference to an encoded background image.
///
/// The bytes are whatever the uploader or camera produced (PNG for camera frames); only the
/// header is inspected, to learn the pixel size needed for placement.
#[derive(Clone, PartialEq)]
pub struct ImageRef {
    bytes: Arc<[u8]>,
    format: image::ImageFormat,
    canvas: Canvas,
}

impl ImageRef {
    /// Wrap encoded bytes from a file upload. Fails if the decoder does not recognize them.
    pub fn from_encoded(bytes: impl Into<Arc<[u8]>>) -> MyomResult<Self> {
        let bytes = bytes.into();
        let (format, canvas) = probe_image(&bytes)?;
        Ok(Self {
            bytes,
            format,
            canvas,
        })
    }

    /// Encode a straight-alpha RGBA8 bitmap as PNG and wrap it.
    pub fn from_rgba8(canvas: Canvas, rgba8: Vec<u8>) -> MyomResult<Self> {
        let png = encode_png(canvas, rgba8)?;
        Ok(Self {
            bytes: png.into(),
            format: image::ImageFormat::Png,
            canvas,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> image::ImageFormat {
        self.format
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn size(&self) -> Size {
        self.canvas.to_size()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIME type of the encoded bytes, for renderers that embed data URLs.
    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }
}

impl fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageRef")
            .field("format", &self.format)
            .field("width", &self.canvas.width)
            .field("height", &self.canvas.height)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/image_ref.rs"]
mod tests;
