use crate::foundation::error::{MyomError, MyomResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Canonical pixel dimensions of a template or bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Like [`Canvas::new`] but rejects empty dimensions.
    pub fn non_empty(width: u32, height: u32) -> MyomResult<Self> {
        if width == 0 || height == 0 {
            return Err(MyomError::validation(format!(
                "canvas dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Canvas scaled by `scale`, in fractional pixels.
    pub fn scaled(self, scale: f64) -> Size {
        Size::new(
            f64::from(self.width) * scale,
            f64::from(self.height) * scale,
        )
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size, `None` on overflow.
    pub fn rgba8_len(self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
