//! Scale computations: fit-to-viewport, user zoom and export upscaling.

use crate::foundation::core::{Canvas, Size};
use crate::foundation::error::{MyomError, MyomResult};

/// Box the template preview must fit into, plus the upper bound on magnification.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportBounds {
    #[serde(default = "default_max_width")]
    pub max_width: f64,
    #[serde(default = "default_max_height")]
    pub max_height: f64,
    #[serde(default = "default_max_multiplier")]
    pub max_multiplier: f64,
}

fn default_max_width() -> f64 {
    400.0
}

fn default_max_height() -> f64 {
    560.0
}

fn default_max_multiplier() -> f64 {
    1.2
}

impl Default for ViewportBounds {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            max_height: default_max_height(),
            max_multiplier: default_max_multiplier(),
        }
    }
}

impl ViewportBounds {
    pub fn validate(&self) -> MyomResult<()> {
        for (name, v) in [
            ("max_width", self.max_width),
            ("max_height", self.max_height),
            ("max_multiplier", self.max_multiplier),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(MyomError::validation(format!(
                    "viewport {name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Fit scale for a template of nominal size `canvas`.
    pub fn fit(&self, canvas: Canvas) -> MyomResult<f64> {
        try_fit_scale(
            f64::from(canvas.width),
            f64::from(canvas.height),
            self.max_width,
            self.max_height,
            self.max_multiplier,
        )
    }
}

/// `min(max_w / w, max_h / h, max_multiplier)`.
///
/// All inputs must be positive; a zero nominal dimension divides by zero. Use [`try_fit_scale`]
/// when the inputs are not already known to be valid.
#[inline]
pub fn fit_scale(
    nominal_width: f64,
    nominal_height: f64,
    max_width: f64,
    max_height: f64,
    max_multiplier: f64,
) -> f64 {
    (max_width / nominal_width)
        .min(max_height / nominal_height)
        .min(max_multiplier)
}

/// Checked [`fit_scale`]: rejects non-positive or non-finite inputs.
pub fn try_fit_scale(
    nominal_width: f64,
    nominal_height: f64,
    max_width: f64,
    max_height: f64,
    max_multiplier: f64,
) -> MyomResult<f64> {
    let all_positive = [
        nominal_width,
        nominal_height,
        max_width,
        max_height,
        max_multiplier,
    ]
    .iter()
    .all(|v| v.is_finite() && *v > 0.0);
    if !all_positive {
        return Err(MyomError::validation(format!(
            "fit scale needs positive dimensions, got nominal {nominal_width}x{nominal_height}, \
             bounds {max_width}x{max_height}, multiplier {max_multiplier}"
        )));
    }
    Ok(fit_scale(
        nominal_width,
        nominal_height,
        max_width,
        max_height,
        max_multiplier,
    ))
}

/// On-screen scale: user zoom applied on top of the fit scale.
#[inline]
pub fn display_scale(user_zoom: f64, fit_scale: f64) -> f64 {
    user_zoom * fit_scale
}

/// Rasterization scale so the capture of a `rendered` element comes out at `target` pixels.
///
/// Returns `None` when the element has no usable layout (zero, negative or non-finite size);
/// callers treat that as not-ready. Never returns less than `1.0`.
pub fn export_scale(
    target_width: f64,
    target_height: f64,
    rendered_width: f64,
    rendered_height: f64,
) -> Option<f64> {
    let laid_out = |v: f64| v.is_finite() && v > 0.0;
    if !laid_out(rendered_width) || !laid_out(rendered_height) {
        return None;
    }
    Some(
        (target_width / rendered_width)
            .max(target_height / rendered_height)
            .max(1.0),
    )
}

/// [`export_scale`] for a canonical canvas and a measured view size.
pub fn export_scale_for(target: Canvas, rendered: Size) -> Option<f64> {
    export_scale(
        f64::from(target.width),
        f64::from(target.height),
        rendered.width,
        rendered.height,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/transform/scale.rs"]
mod tests;
