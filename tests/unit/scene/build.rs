use super::*;
use crate::assets::image_ref::ImageRef;
use crate::document::model::{FontKey, HEADLINE_ID};
use crate::document::overlays::{OverlayIdGen, add_sticker, move_overlay};
use crate::foundation::core::{Canvas, Point};
use crate::template::registry::TemplateKind;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn scene_size_is_nominal_times_scale() {
    for kind in TemplateKind::ALL {
        let doc = Document::default_for(kind);
        let scene = Scene::build(&doc, 0.5);
        assert_eq!(scene.size, doc.canvas().scaled(0.5));
        assert_eq!(scene.kind, kind);
        assert_eq!(scene.background, doc.background());
    }
}

#[test]
fn font_sizes_respect_floor() {
    let doc = Document::default_for(TemplateKind::BookCover);
    let tiny = Scene::build(&doc, 0.1);
    let title = tiny.text_blocks().next().unwrap();
    assert_eq!(title.role, BlockRole::Title);
    assert_eq!(title.style.font_size, 18.0);

    let big = Scene::build(&doc, 2.0);
    assert_eq!(big.text_blocks().next().unwrap().style.font_size, 56.0);
}

#[test]
fn empty_optional_blocks_are_skipped() {
    let mut cover = BookCover::default();
    cover.subtitle.clear();
    let scene = Scene::build(&Document::BookCover(cover), 1.0);
    let roles: Vec<_> = scene.text_blocks().map(|b| b.role).collect();
    assert_eq!(roles, vec![BlockRole::Title, BlockRole::Author]);

    let mut page = BookPage::default();
    page.title.clear();
    let scene = Scene::build(&Document::BookPage(page), 1.0);
    let first = scene.text_blocks().next().unwrap();
    assert_eq!(first.role, BlockRole::Body);
    assert_eq!(first.margin_top, 0.0);
}

#[test]
fn invite_has_centered_blocks_and_rule() {
    let scene = Scene::build(&Document::default_for(TemplateKind::EventInvite), 1.0);
    assert_eq!(scene.arrangement, Arrangement::Center);
    assert!(
        scene
            .blocks
            .iter()
            .any(|b| matches!(b, SceneBlock::Rule { width, .. } if *width == 48.0))
    );
    assert_eq!(scene.text_blocks().count(), 6);
    assert!(scene.overlays.is_empty());
}

#[test]
fn overlays_are_placed_at_normalized_centers() {
    let doc = Document::default_for(TemplateKind::SocialPost);
    let Document::SocialPost(post) = &doc else {
        unreachable!()
    };
    let overlays = move_overlay(&post.overlays, HEADLINE_ID, 0.25, 0.75);
    let doc = Document::SocialPost(SocialPost {
        overlays,
        ..post.clone()
    });

    let scale = 400.0 / 1080.0;
    let scene = Scene::build(&doc, scale);
    let headline = scene
        .overlays
        .iter()
        .find(|o| o.id == HEADLINE_ID)
        .unwrap();
    assert!(approx(headline.center.x, 0.25 * 1080.0 * scale));
    assert!(approx(headline.center.y, 0.75 * 1080.0 * scale));
    assert!(headline.style.bold);
}

#[test]
fn stickers_paint_above_text_overlays() {
    let mut post = SocialPost::default();
    let mut ids = OverlayIdGen::after(&post.overlays);
    post.overlays = add_sticker(&post.overlays, &mut ids, "\u{2764}");
    // Move the sticker to the front of the list; paint order must still put it last.
    post.overlays.rotate_right(1);
    let scene = Scene::build(&Document::SocialPost(post), 1.0);
    let roles: Vec<_> = scene.overlays.iter().map(|o| o.role).collect();
    assert_eq!(
        roles,
        vec![
            OverlayRole::Headline,
            OverlayRole::Subtext,
            OverlayRole::Sticker
        ]
    );
}

#[test]
fn background_image_is_anchored_at_focal_point() {
    let image = ImageRef::from_rgba8(Canvas::new(20, 10), vec![0u8; 800]).unwrap();
    let mut post = SocialPost::default();
    post.background_image.image = Some(image);
    post.background_image.focal = Point::new(0.25, 0.5);
    let scene = Scene::build(&Document::SocialPost(post), 0.5);

    let placement = scene.background_image.expect("image placed");
    let anchor_x = placement.rect.x0 + 0.25 * placement.rect.width();
    assert!(approx(anchor_x, scene.size.width * 0.5));
    assert!(placement.rect.height() >= scene.size.height - 1e-9);
}

#[test]
fn padding_scales_with_display() {
    let scene = Scene::build(&Document::default_for(TemplateKind::SocialPost), 0.5);
    assert_eq!(scene.padding, 40.0);
    assert_eq!(scene.arrangement, Arrangement::Free);
    assert_eq!(scene.font_family, FontKey::DmSans.family());
}
