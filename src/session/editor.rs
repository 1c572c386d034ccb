use std::cell::Cell;

use crate::assets::image_ref::ImageRef;
use crate::capture::camera::{CameraCapture, CameraDevice};
use crate::config::EditorConfig;
use crate::document::model::{Document, Overlay, OverlayId, SocialPost};
use crate::document::overlays::{
    OverlayEdit, OverlayIdGen, add_sticker, edit_overlay, move_overlay, remove_overlay,
    sticker_count,
};
use crate::document::patch::{DocumentPatch, SocialPostPatch};
use crate::export::flow::{ExportOutcome, ExportRequest, export_png};
use crate::export::target::{ExportTarget, timestamp_ms_now};
use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::error::{MyomError, MyomResult};
use crate::render::backend::{Rasterizer, Renderer};
use crate::scene::model::Scene;
use crate::session::drag::{DragSession, DragTarget};
use crate::template::registry::TemplateKind;
use crate::transform::background::background_placement;
use crate::transform::scale::display_scale;

/// Lowers the export flag when dropped.
struct BusyGuard<'a>(&'a Cell<bool>);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// One user's editing session: the document and everything derived from interacting with it.
///
/// Every edit replaces the document with a new value; a failed export or capture leaves it as
/// it was.
pub struct EditorSession {
    config: EditorConfig,
    document: Document,
    zoom: f64,
    ids: OverlayIdGen,
    drag: Option<DragSession>,
    layout: Option<Size>,
    exporting: Cell<bool>,
}

impl EditorSession {
    /// Start on the default book cover.
    pub fn new(config: EditorConfig) -> MyomResult<Self> {
        Self::with_document(config, Document::default())
    }

    /// Start on an existing document, e.g. one restored from JSON. Both inputs are validated.
    pub fn with_document(config: EditorConfig, document: Document) -> MyomResult<Self> {
        config.validate()?;
        document.validate()?;
        let ids = OverlayIdGen::after(document.overlays());
        Ok(Self {
            config,
            document,
            zoom: 1.0,
            ids,
            drag: None,
            layout: None,
            exporting: Cell::new(false),
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn kind(&self) -> TemplateKind {
        self.document.kind()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn layout(&self) -> Option<Size> {
        self.layout
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Replace the document, dropping any state tied to the previous view.
    fn replace(&mut self, document: Document) {
        let geometry_changed = document.canvas() != self.document.canvas();
        self.ids.observe(document.overlays());
        self.document = document;
        if geometry_changed {
            self.layout = None;
            self.drag = None;
        }
    }

    /// Switch to `kind`, discarding edits: field sets are not compatible across kinds.
    #[tracing::instrument(skip(self))]
    pub fn switch_kind(&mut self, kind: TemplateKind) {
        self.document = Document::default_for(kind);
        self.ids.observe(self.document.overlays());
        self.layout = None;
        self.drag = None;
    }

    /// Merge a partial edit into the document.
    #[tracing::instrument(skip(self, patch), fields(kind = %patch.kind()))]
    pub fn apply(&mut self, patch: &DocumentPatch) -> MyomResult<()> {
        let next = self.document.update(patch)?;
        self.replace(next);
        Ok(())
    }

    /// Set the user zoom, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        let zoom = self.config.zoom.clamp(zoom);
        if zoom != self.zoom {
            self.zoom = zoom;
            self.layout = None;
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.config.zoom.step_in(self.zoom));
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.config.zoom.step_out(self.zoom));
    }

    pub fn fit_scale(&self) -> MyomResult<f64> {
        self.config.viewport.fit(self.document.canvas())
    }

    pub fn display_scale(&self) -> MyomResult<f64> {
        Ok(display_scale(self.zoom, self.fit_scale()?))
    }

    /// Scene for the current document at the current display scale.
    pub fn scene(&self) -> MyomResult<Scene> {
        Ok(Scene::build(&self.document, self.display_scale()?))
    }

    /// Build the scene, paint it and record the measured layout.
    pub fn render(&mut self, renderer: &mut dyn Renderer) -> MyomResult<Scene> {
        let scene = self.scene()?;
        let measured = renderer.paint(&scene)?;
        self.on_layout(measured);
        Ok(scene)
    }

    /// Record the measured size of the painted template box. A zero size marks it unmounted.
    pub fn on_layout(&mut self, size: Size) {
        let mounted = size.width.is_finite()
            && size.height.is_finite()
            && size.width > 0.0
            && size.height > 0.0;
        self.layout = mounted.then_some(size);
    }

    fn social(&self) -> MyomResult<&SocialPost> {
        match &self.document {
            Document::SocialPost(d) => Ok(d),
            other => Err(MyomError::validation(format!(
                "{} documents have no overlays or background image",
                other.kind()
            ))),
        }
    }

    fn replace_overlays(&mut self, overlays: Vec<Overlay>) {
        if let Document::SocialPost(d) = &self.document {
            let next = Document::SocialPost(SocialPost {
                overlays,
                ..d.clone()
            });
            self.replace(next);
        }
    }

    /// Add a sticker at the center of the template and return its identity.
    pub fn add_sticker(&mut self, text: impl Into<String>) -> MyomResult<OverlayId> {
        let current = &self.social()?.overlays;
        if sticker_count(current) >= self.config.max_stickers {
            return Err(MyomError::validation(format!(
                "sticker limit of {} reached",
                self.config.max_stickers
            )));
        }
        let current = current.clone();
        let overlays = add_sticker(&current, &mut self.ids, text);
        let id = overlays.last().map(|o| o.id).ok_or_else(|| {
            MyomError::Other(anyhow::anyhow!("sticker list empty after insert"))
        })?;
        self.replace_overlays(overlays);
        Ok(id)
    }

    /// Remove a sticker. Unknown ids and non-sticker overlays are ignored.
    pub fn remove_overlay(&mut self, id: OverlayId) {
        let next = remove_overlay(self.document.overlays(), id);
        let dragged = self.drag.map(|d| d.target());
        if dragged == Some(DragTarget::Overlay(id)) {
            self.drag = None;
        }
        self.replace_overlays(next);
    }

    /// Edit text, scale or rotation of an overlay. Unknown ids are ignored.
    pub fn edit_overlay(&mut self, id: OverlayId, edit: &OverlayEdit) {
        let next = edit_overlay(self.document.overlays(), id, edit);
        self.replace_overlays(next);
    }

    /// Place an overlay at a normalized position. Unknown ids are ignored.
    pub fn move_overlay(&mut self, id: OverlayId, position: Point) {
        let next = move_overlay(self.document.overlays(), id, position.x, position.y);
        self.replace_overlays(next);
    }

    /// Start dragging overlay `id`. `container` is the template box in pointer coordinates.
    ///
    /// Any drag already in progress is ended first; only one pointer is tracked.
    pub fn begin_drag(&mut self, id: OverlayId, container: Rect) -> MyomResult<()> {
        self.drag = None;
        if !self.document.overlays().iter().any(|o| o.id == id) {
            return Err(MyomError::validation(format!("no overlay with id {}", id.0)));
        }
        self.drag = Some(DragSession::begin(DragTarget::Overlay(id), container)?);
        Ok(())
    }

    /// Start panning the background image from `pointer`.
    pub fn begin_background_drag(&mut self, pointer: Point, container: Rect) -> MyomResult<()> {
        self.drag = None;
        let bg = &self.social()?.background_image;
        let Some(image) = &bg.image else {
            return Err(MyomError::validation("no background image to pan"));
        };
        let placement = background_placement(container.size(), image.size(), bg.zoom, bg.focal);
        let target = DragTarget::Background {
            start_pointer: pointer,
            start_focal: bg.focal,
            placement,
        };
        self.drag = Some(DragSession::begin(target, container)?);
        Ok(())
    }

    /// Apply a pointer move to the active drag. Returns the new normalized position (overlay
    /// center or background focal point), or `None` when no drag is active.
    pub fn drag_to(&mut self, pointer: Point) -> Option<Point> {
        let drag = self.drag?;
        match drag.target() {
            DragTarget::Overlay(id) => {
                let p = drag.normalized(pointer);
                self.move_overlay(id, p);
                Some(p)
            }
            DragTarget::Background { .. } => {
                let focal = drag.focal(pointer)?;
                let patch = DocumentPatch::SocialPost(SocialPostPatch {
                    image_focal: Some(focal),
                    ..SocialPostPatch::default()
                });
                if let Err(e) = self.apply(&patch) {
                    tracing::debug!(error = %e, "background drag ignored");
                    return None;
                }
                Some(focal)
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Set (or clear) the social-post background image.
    pub fn set_background_image(&mut self, image: Option<ImageRef>) -> MyomResult<()> {
        self.social()?;
        self.apply(&DocumentPatch::SocialPost(SocialPostPatch {
            image: Some(image),
            ..SocialPostPatch::default()
        }))
    }

    /// Idle camera flow sized by the configured capture fallback.
    pub fn camera_capture(&self) -> CameraCapture {
        CameraCapture::new(self.config.capture_fallback)
    }

    /// Start the camera for a background capture.
    pub fn start_camera(
        &self,
        capture: &mut CameraCapture,
        device: &mut dyn CameraDevice,
    ) -> MyomResult<()> {
        self.social()?;
        capture.start(device)
    }

    /// Capture the current camera frame into the background image.
    ///
    /// The camera is released whether or not the capture succeeds; on failure the background is
    /// left unchanged.
    pub fn capture_background(&mut self, capture: &mut CameraCapture) -> MyomResult<()> {
        let image = capture.capture()?;
        self.set_background_image(Some(image))
    }

    /// Export the painted view as PNG at canonical template dimensions.
    ///
    /// Refused silently with [`ExportOutcome::NotReady`] before the first layout, and with
    /// [`ExportOutcome::Busy`] while another export runs.
    #[tracing::instrument(skip_all, fields(kind = %self.kind()))]
    pub fn export(
        &self,
        rasterizer: &mut dyn Rasterizer,
        target: &mut dyn ExportTarget,
        timestamp_ms: u64,
    ) -> MyomResult<ExportOutcome> {
        let Some(_busy) = BusyGuard::acquire(&self.exporting) else {
            tracing::debug!("export already running");
            return Ok(ExportOutcome::Busy);
        };
        let scene = self.scene()?;
        export_png(
            ExportRequest {
                scene: &scene,
                target: self.document.canvas(),
                layout: self.layout,
                prefix: &self.config.export_prefix,
                timestamp_ms,
            },
            rasterizer,
            target,
        )
    }

    /// [`EditorSession::export`] stamped with the current time.
    pub fn export_now(
        &self,
        rasterizer: &mut dyn Rasterizer,
        target: &mut dyn ExportTarget,
    ) -> MyomResult<ExportOutcome> {
        self.export(rasterizer, target, timestamp_ms_now())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/editor.rs"]
mod tests;
