use std::io::Cursor;

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{MyomError, MyomResult};

/// Detect the format and pixel dimensions of encoded image bytes without decoding pixels.
pub fn probe_image(bytes: &[u8]) -> MyomResult<(image::ImageFormat, Canvas)> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("sniff image format")?;
    let format = reader
        .format()
        .ok_or_else(|| MyomError::acquisition("unrecognized image format"))?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| MyomError::acquisition(format!("read image header: {e}")))?;
    let canvas = Canvas::non_empty(width, height)
        .map_err(|_| MyomError::acquisition(format!("image has empty size {width}x{height}")))?;
    Ok((format, canvas))
}

/// Encode tightly packed straight-alpha RGBA8 pixels as PNG.
pub fn encode_png(canvas: Canvas, rgba8: Vec<u8>) -> MyomResult<Vec<u8>> {
    if canvas.is_empty() {
        return Err(MyomError::validation("cannot encode an empty bitmap"));
    }
    let Some(expected) = canvas.rgba8_len() else {
        return Err(MyomError::validation(format!(
            "bitmap {}x{} is too large to address",
            canvas.width, canvas.height
        )));
    };
    if rgba8.len() != expected {
        return Err(MyomError::validation(format!(
            "rgba buffer has {} bytes, expected {expected} for {}x{}",
            rgba8.len(),
            canvas.width,
            canvas.height
        )));
    }
    let img = image::RgbaImage::from_raw(canvas.width, canvas.height, rgba8)
        .context("wrap rgba buffer")?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
