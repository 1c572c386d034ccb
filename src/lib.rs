//! Myom is the core of a browser template editor for book covers, book pages, event invites and
//! social-media posts.
//!
//! The crate owns everything that is not pixels: the per-template documents and their defaults,
//! normalized overlay geometry, pointer-drag transforms, preview scaling and the export
//! upscaling rule. Painting, rasterization, the camera and file storage are reached through
//! small traits so a host (DOM, canvas, native window) can plug in.
//!
//! # Flow
//!
//! 1. **Edit**: an [`EditorSession`] holds the [`Document`] for the selected [`TemplateKind`] and
//!    applies [`DocumentPatch`]es, overlay edits and drags, always producing a new document.
//! 2. **Lay out**: [`Scene::build`] turns the document and the display scale into a
//!    backend-agnostic [`Scene`].
//! 3. **Paint**: a [`Renderer`] draws the scene and reports the measured view size.
//! 4. **Export**: a [`Rasterizer`] captures the view at the scale that restores canonical
//!    template dimensions and an [`ExportTarget`] stores the PNG.
//!
//! Overlay positions are stored normalized to `[0, 1]` so they survive zoom and resizing.
#![forbid(unsafe_code)]

mod assets;
mod capture;
mod config;
mod document;
mod export;
mod foundation;
mod render;
mod scene;
mod session;
mod template;

/// Geometry helpers: preview and export scales, normalized coordinates, background placement.
pub mod transform;

pub use assets::codec::{encode_png, probe_image};
pub use assets::image_ref::ImageRef;
pub use capture::camera::{CameraCapture, CameraDevice, VideoStream};
pub use config::{EditorConfig, ZoomConfig};
pub use document::model::{
    BackgroundImage, BookCover, BookPage, Document, EventInvite, FontKey, HEADLINE_ID, Overlay,
    OverlayId, OverlayRole, SUBTEXT_ID, SocialPost,
};
pub use document::overlays::{
    OverlayEdit, OverlayIdGen, add_sticker, edit_overlay, move_overlay, remove_overlay,
    sticker_count,
};
pub use document::patch::{
    BookCoverPatch, BookPagePatch, DocumentPatch, EventInvitePatch, SocialPostPatch,
};
pub use export::flow::{ExportOutcome, ExportRequest, ExportedFile, export_png};
pub use export::target::{
    DirectoryTarget, ExportTarget, InMemoryTarget, ensure_parent_dir, export_file_name,
    timestamp_ms_now,
};
pub use foundation::color::Color;
pub use foundation::core::{Canvas, Point, Rect, Size, Vec2};
pub use foundation::error::{MyomError, MyomResult};
pub use render::backend::{RasterImage, Rasterizer, Renderer};
pub use scene::model::{
    Arrangement, BlockRole, ImagePlacement, OverlayPlacement, Scene, SceneBlock, TextBlock,
    TextStyle,
};
pub use session::drag::{DragSession, DragTarget};
pub use session::editor::EditorSession;
pub use template::registry::{SizePreset, SizePresetSpec, TemplateKind, TemplateSpec};
pub use transform::scale::ViewportBounds;
