use std::path::PathBuf;

use crate::export::target::{ExportTarget, export_file_name};
use crate::foundation::core::{Canvas, Size};
use crate::foundation::error::{MyomError, MyomResult};
use crate::render::backend::Rasterizer;
use crate::scene::model::Scene;
use crate::transform::scale::export_scale_for;

/// Inputs of one export.
#[derive(Clone, Copy, Debug)]
pub struct ExportRequest<'a> {
    /// Scene currently painted on screen.
    pub scene: &'a Scene,
    /// Canonical template size the output should match.
    pub target: Canvas,
    /// Measured size of the painted view; `None` when not mounted.
    pub layout: Option<Size>,
    pub prefix: &'a str,
    pub timestamp_ms: u64,
}

/// A written export.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub file_name: String,
    /// Rasterization scale that was applied to the on-screen view.
    pub scale: f64,
    /// Pixel size of the encoded image.
    pub canvas: Canvas,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExportOutcome {
    Saved(ExportedFile),
    /// The view has no layout yet; nothing was attempted. Retry after the next paint.
    NotReady,
    /// Another export is still running.
    Busy,
}

/// Rasterize the painted view at the scale that yields canonical dimensions, encode PNG and save.
#[tracing::instrument(skip_all, fields(kind = %req.scene.kind))]
pub fn export_png(
    req: ExportRequest<'_>,
    rasterizer: &mut dyn Rasterizer,
    target: &mut dyn ExportTarget,
) -> MyomResult<ExportOutcome> {
    let Some(scale) = req.layout.and_then(|l| export_scale_for(req.target, l)) else {
        tracing::debug!("export requested before layout; ignoring");
        return Ok(ExportOutcome::NotReady);
    };

    let raster = rasterizer.rasterize(req.scene, scale).map_err(|e| {
        tracing::warn!(error = %e, scale, "rasterization failed");
        match e {
            MyomError::Rasterization(_) => e,
            other => MyomError::rasterization(other.to_string()),
        }
    })?;
    let canvas = raster.canvas();
    let png = raster.encode_png().inspect_err(|e| {
        tracing::warn!(error = %e, "export encoding failed");
    })?;

    let file_name = export_file_name(req.prefix, req.scene.kind, req.timestamp_ms);
    let path = target.save(&file_name, &png).inspect_err(|e| {
        tracing::warn!(error = %e, file = %file_name, "export save failed");
    })?;

    tracing::debug!(
        file = %file_name,
        scale,
        width = canvas.width,
        height = canvas.height,
        "export saved"
    );
    Ok(ExportOutcome::Saved(ExportedFile {
        path,
        file_name,
        scale,
        canvas,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/export/flow.rs"]
mod tests;
