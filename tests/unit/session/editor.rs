use super::*;
use crate::document::model::{HEADLINE_ID, OverlayRole, SUBTEXT_ID};
use crate::document::patch::BookCoverPatch;
use crate::export::target::InMemoryTarget;
use crate::foundation::core::Canvas;
use crate::render::backend::RasterImage;
use crate::template::registry::SizePreset;

/// Reports the scene size as the measured layout.
struct MeasuringRenderer;

impl Renderer for MeasuringRenderer {
    fn paint(&mut self, scene: &Scene) -> MyomResult<Size> {
        Ok(scene.size)
    }
}

struct SolidRasterizer;

impl Rasterizer for SolidRasterizer {
    fn rasterize(&mut self, scene: &Scene, scale: f64) -> MyomResult<RasterImage> {
        let width = (scene.size.width * scale).round() as u32;
        let height = (scene.size.height * scale).round() as u32;
        Ok(RasterImage {
            width,
            height,
            data: vec![255; (width * height * 4) as usize],
        })
    }
}

fn social_session() -> EditorSession {
    let mut s = EditorSession::new(EditorConfig::default()).unwrap();
    s.switch_kind(TemplateKind::SocialPost);
    s
}

fn title_patch(title: &str) -> DocumentPatch {
    DocumentPatch::BookCover(BookCoverPatch {
        title: Some(title.to_owned()),
        ..BookCoverPatch::default()
    })
}

#[test]
fn switching_kind_discards_edits() {
    let mut s = EditorSession::new(EditorConfig::default()).unwrap();
    s.apply(&title_patch("Foo")).unwrap();
    let Document::BookCover(cover) = s.document() else {
        panic!("expected a cover");
    };
    assert_eq!(cover.title, "Foo");

    s.switch_kind(TemplateKind::EventInvite);
    s.switch_kind(TemplateKind::BookCover);
    assert_eq!(s.document(), &Document::default_for(TemplateKind::BookCover));
}

#[test]
fn patch_for_other_kind_leaves_document_untouched() {
    let mut s = social_session();
    let before = s.document().clone();
    let err = s.apply(&title_patch("Foo")).unwrap_err();
    assert!(matches!(err, MyomError::Validation(_)));
    assert_eq!(s.document(), &before);
}

#[test]
fn zoom_is_clamped_and_clears_layout() {
    let mut s = EditorSession::new(EditorConfig::default()).unwrap();
    s.render(&mut MeasuringRenderer).unwrap();
    assert!(s.layout().is_some());

    s.zoom_in();
    assert_eq!(s.zoom(), 1.25);
    assert!(s.layout().is_none());

    s.set_zoom(10.0);
    assert_eq!(s.zoom(), 2.0);
    s.set_zoom(0.0);
    assert_eq!(s.zoom(), 0.25);
    s.zoom_out();
    assert_eq!(s.zoom(), 0.25);
}

#[test]
fn display_scale_combines_fit_and_zoom() {
    let mut s = social_session();
    let fit = s.fit_scale().unwrap();
    assert!((fit - 400.0 / 1080.0).abs() < 1e-12);
    s.set_zoom(2.0);
    assert!((s.display_scale().unwrap() - 2.0 * fit).abs() < 1e-12);
}

#[test]
fn stickers_get_fresh_ids_and_only_on_social_posts() {
    let mut cover = EditorSession::new(EditorConfig::default()).unwrap();
    assert!(cover.add_sticker("\u{2b50}").is_err());

    let mut s = social_session();
    let a = s.add_sticker("\u{2b50}").unwrap();
    let b = s.add_sticker("\u{2b50}").unwrap();
    assert_ne!(a, b);
    assert!(a != HEADLINE_ID && a != SUBTEXT_ID);

    s.remove_overlay(a);
    let c = s.add_sticker("\u{1f525}").unwrap();
    assert!(c != a && c != b);

    // Text overlays are not removable.
    s.remove_overlay(HEADLINE_ID);
    assert_eq!(s.document().overlays().len(), 4);
}

#[test]
fn sticker_limit_is_enforced() {
    let config = EditorConfig {
        max_stickers: 1,
        ..EditorConfig::default()
    };
    let mut s = EditorSession::new(config).unwrap();
    s.switch_kind(TemplateKind::SocialPost);
    s.add_sticker("a").unwrap();
    assert!(matches!(s.add_sticker("b"), Err(MyomError::Validation(_))));
}

#[test]
fn overlay_drag_moves_only_the_target() {
    let mut s = social_session();
    let container = Rect::new(100.0, 100.0, 500.0, 500.0);
    s.begin_drag(HEADLINE_ID, container).unwrap();

    let p = s.drag_to(Point::new(200.0, 400.0)).unwrap();
    assert_eq!(p, Point::new(0.25, 0.75));
    s.end_drag();
    assert_eq!(s.drag_to(Point::new(0.0, 0.0)), None);

    let overlays = s.document().overlays();
    assert_eq!(overlays[0].position, Point::new(0.25, 0.75));
    assert_eq!(overlays[1].role, OverlayRole::Subtext);
    assert_eq!(overlays[1].position, Point::new(0.5, 0.6));
}

#[test]
fn drag_of_unknown_overlay_is_rejected() {
    let mut s = social_session();
    let err = s
        .begin_drag(OverlayId(99), Rect::new(0.0, 0.0, 10.0, 10.0))
        .unwrap_err();
    assert!(matches!(err, MyomError::Validation(_)));
    assert!(!s.is_dragging());
}

#[test]
fn removing_dragged_sticker_ends_drag() {
    let mut s = social_session();
    let id = s.add_sticker("x").unwrap();
    s.begin_drag(id, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
    s.remove_overlay(id);
    assert!(!s.is_dragging());
}

#[test]
fn background_drag_pans_focal_point() {
    let mut s = social_session();
    let image = ImageRef::from_rgba8(Canvas::new(4, 4), vec![0; 64]).unwrap();
    s.set_background_image(Some(image)).unwrap();

    let container = Rect::new(0.0, 0.0, 200.0, 200.0);
    s.begin_background_drag(Point::new(50.0, 50.0), container)
        .unwrap();
    let focal = s.drag_to(Point::new(70.0, 50.0)).unwrap();
    assert!((focal.x - 0.4).abs() < 1e-9);
    assert!((focal.y - 0.5).abs() < 1e-9);

    let Document::SocialPost(post) = s.document() else {
        panic!("expected a social post");
    };
    assert_eq!(post.background_image.focal, focal);
}

#[test]
fn background_drag_needs_an_image() {
    let mut s = social_session();
    let err = s
        .begin_background_drag(Point::ZERO, Rect::new(0.0, 0.0, 10.0, 10.0))
        .unwrap_err();
    assert!(matches!(err, MyomError::Validation(_)));
}

#[test]
fn preset_change_keeps_normalized_positions() {
    let mut s = social_session();
    s.move_overlay(HEADLINE_ID, Point::new(0.1, 0.9));
    s.apply(&DocumentPatch::SocialPost(SocialPostPatch {
        size: Some(SizePreset::Story),
        ..SocialPostPatch::default()
    }))
    .unwrap();
    assert_eq!(s.document().canvas(), SizePreset::Story.canvas());
    assert_eq!(s.document().overlays()[0].position, Point::new(0.1, 0.9));
}

#[test]
fn export_before_layout_is_not_ready() {
    let s = EditorSession::new(EditorConfig::default()).unwrap();
    let mut target = InMemoryTarget::new();
    let outcome = s.export(&mut SolidRasterizer, &mut target, 1).unwrap();
    assert_eq!(outcome, ExportOutcome::NotReady);
    assert!(target.files().is_empty());
    assert!(!s.is_exporting());
}

#[test]
fn export_matches_canonical_size_and_keeps_document() {
    let mut s = EditorSession::new(EditorConfig::default()).unwrap();
    s.set_zoom(0.5);
    s.render(&mut MeasuringRenderer).unwrap();
    let before = s.document().clone();

    let mut target = InMemoryTarget::new();
    let outcome = s.export(&mut SolidRasterizer, &mut target, 7).unwrap();
    let ExportOutcome::Saved(file) = outcome else {
        panic!("expected a saved export, got {outcome:?}");
    };
    assert_eq!(file.file_name, "myom-book-cover-7.png");
    assert_eq!(file.canvas, Canvas::new(405, 585));
    assert_eq!(s.document(), &before);
    assert!(!s.is_exporting());
}

#[test]
fn concurrent_export_is_busy() {
    let mut s = EditorSession::new(EditorConfig::default()).unwrap();
    s.render(&mut MeasuringRenderer).unwrap();
    let _held = BusyGuard::acquire(&s.exporting).unwrap();
    let outcome = s
        .export(&mut SolidRasterizer, &mut InMemoryTarget::new(), 1)
        .unwrap();
    assert_eq!(outcome, ExportOutcome::Busy);
}

#[test]
fn zero_layout_marks_view_unmounted() {
    let mut s = EditorSession::new(EditorConfig::default()).unwrap();
    s.on_layout(Size::new(300.0, 400.0));
    assert!(s.layout().is_some());
    s.on_layout(Size::ZERO);
    assert!(s.layout().is_none());
}

#[test]
fn restored_document_must_be_valid() {
    let mut post = SocialPost::default();
    post.overlays[0].position = Point::new(5.0, -3.0);
    let err = EditorSession::with_document(EditorConfig::default(), Document::SocialPost(post))
        .err()
        .unwrap();
    assert!(matches!(err, MyomError::Validation(_)));

    let s = EditorSession::with_document(
        EditorConfig::default(),
        Document::default_for(TemplateKind::SocialPost),
    )
    .unwrap();
    assert_eq!(s.kind(), TemplateKind::SocialPost);
}
