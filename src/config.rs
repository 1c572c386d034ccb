//! Editor configuration, loadable from JSON.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{MyomError, MyomResult};
use crate::transform::scale::ViewportBounds;

/// Tunables for an editing session. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Box the preview is fitted into.
    pub viewport: ViewportBounds,
    /// User zoom limits and step.
    pub zoom: ZoomConfig,
    /// Bitmap size for camera frames when the stream reports no native resolution.
    pub capture_fallback: Canvas,
    /// Export file names are `{prefix}-{kind}-{timestamp_ms}.png`.
    pub export_prefix: String,
    /// Upper bound on stickers per document.
    pub max_stickers: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportBounds::default(),
            zoom: ZoomConfig::default(),
            capture_fallback: Canvas::new(1080, 1080),
            export_prefix: "myom".to_owned(),
            max_stickers: 64,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(s: &str) -> MyomResult<Self> {
        let cfg: EditorConfig =
            serde_json::from_str(s).map_err(|e| MyomError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> MyomResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read editor config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> MyomResult<()> {
        self.viewport.validate()?;
        self.zoom.validate()?;
        if self.capture_fallback.is_empty() {
            return Err(MyomError::validation(
                "capture_fallback width/height must be non-zero",
            ));
        }
        if self.export_prefix.is_empty()
            || self
                .export_prefix
                .chars()
                .any(|c| c == '/' || c == '\\' || c.is_control())
        {
            return Err(MyomError::validation(format!(
                "export_prefix '{}' is not a valid file name prefix",
                self.export_prefix
            )));
        }
        Ok(())
    }
}

/// Bounds and increment for the user zoom control.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 0.25,
            max: 2.0,
            step: 0.25,
        }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> MyomResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.min) || !positive(self.max) || !positive(self.step) {
            return Err(MyomError::validation("zoom min/max/step must be > 0"));
        }
        if self.min > self.max {
            return Err(MyomError::validation(format!(
                "zoom min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn clamp(&self, zoom: f64) -> f64 {
        if zoom.is_nan() {
            return 1.0_f64.clamp(self.min, self.max);
        }
        zoom.clamp(self.min, self.max)
    }

    pub fn step_in(&self, zoom: f64) -> f64 {
        self.clamp(zoom + self.step)
    }

    pub fn step_out(&self, zoom: f64) -> f64 {
        self.clamp(zoom - self.step)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
