//! Per-template styling: turns a [`Document`] and a display scale into a [`Scene`].

use crate::document::model::{
    BookCover, BookPage, Document, EventInvite, OverlayRole, SocialPost,
};
use crate::foundation::core::Size;
use crate::scene::model::{
    Arrangement, BlockRole, ImagePlacement, OverlayPlacement, Scene, SceneBlock, TextBlock,
    TextStyle,
};
use crate::transform::background::background_placement;
use crate::transform::normalized::normalized_to_pixel;

/// Font size that scales with the preview but never drops below a legibility floor.
#[inline]
fn font_px(base: f64, min: f64, scale: f64) -> f64 {
    (base * scale).max(min)
}

fn text(role: BlockRole, value: &str, style: TextStyle, margin_top: f64) -> SceneBlock {
    SceneBlock::Text(TextBlock {
        role,
        text: value.to_owned(),
        style,
        margin_top,
    })
}

impl Scene {
    /// Lay out `doc` at `display_scale`.
    pub fn build(doc: &Document, display_scale: f64) -> Scene {
        let size = doc.canvas().scaled(display_scale);
        let (padding, arrangement, blocks) = match doc {
            Document::BookCover(d) => (32.0, Arrangement::Bottom, cover_blocks(d, display_scale)),
            Document::BookPage(d) => (40.0, Arrangement::Top, page_blocks(d, display_scale)),
            Document::EventInvite(d) => {
                (36.0, Arrangement::Center, invite_blocks(d, display_scale))
            }
            Document::SocialPost(_) => (80.0, Arrangement::Free, Vec::new()),
        };
        let (background_image, overlays) = match doc {
            Document::SocialPost(d) => (
                social_image(d, size),
                social_overlays(d, size, display_scale),
            ),
            Document::BookCover(_) | Document::BookPage(_) | Document::EventInvite(_) => {
                (None, Vec::new())
            }
        };

        Scene {
            kind: doc.kind(),
            size,
            display_scale,
            background: doc.background(),
            text_color: doc.text_color(),
            font_family: doc.font().family(),
            padding: padding * display_scale,
            arrangement,
            background_image,
            blocks,
            overlays,
        }
    }

    pub fn text_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter_map(|b| match b {
            SceneBlock::Text(t) => Some(t),
            SceneBlock::Rule { .. } => None,
        })
    }
}

fn cover_blocks(d: &BookCover, s: f64) -> Vec<SceneBlock> {
    let mut out = vec![text(
        BlockRole::Title,
        &d.title,
        TextStyle {
            font_size: font_px(28.0, 18.0, s),
            line_height: 1.2,
            bold: true,
            ..TextStyle::default()
        },
        0.0,
    )];
    if !d.subtitle.is_empty() {
        out.push(text(
            BlockRole::Subtitle,
            &d.subtitle,
            TextStyle {
                font_size: font_px(16.0, 12.0, s),
                opacity: 0.9,
                ..TextStyle::default()
            },
            8.0,
        ));
    }
    out.push(text(
        BlockRole::Author,
        &d.author,
        TextStyle {
            font_size: font_px(14.0, 11.0, s),
            italic: true,
            opacity: 0.8,
            ..TextStyle::default()
        },
        8.0 + 16.0,
    ));
    out
}

fn page_blocks(d: &BookPage, s: f64) -> Vec<SceneBlock> {
    let mut out = Vec::with_capacity(3);
    if !d.title.is_empty() {
        out.push(text(
            BlockRole::Title,
            &d.title,
            TextStyle {
                font_size: font_px(20.0, 14.0, s),
                bold: true,
                ..TextStyle::default()
            },
            0.0,
        ));
    }
    let body_gap = if out.is_empty() { 0.0 } else { 16.0 };
    out.push(text(
        BlockRole::Body,
        &d.body,
        TextStyle {
            font_size: font_px(14.0, 11.0, s),
            line_height: 1.625,
            preserve_newlines: true,
            ..TextStyle::default()
        },
        body_gap,
    ));
    out.push(text(
        BlockRole::PageNumber,
        &d.page_number,
        TextStyle {
            font_size: font_px(12.0, 10.0, s),
            opacity: 0.7,
            ..TextStyle::default()
        },
        16.0,
    ));
    out
}

fn invite_blocks(d: &EventInvite, s: f64) -> Vec<SceneBlock> {
    vec![
        text(
            BlockRole::Subtitle,
            &d.subtitle,
            TextStyle {
                font_size: font_px(12.0, 10.0, s),
                uppercase: true,
                letter_spacing_em: 0.3,
                opacity: 0.8,
                ..TextStyle::default()
            },
            0.0,
        ),
        text(
            BlockRole::Title,
            &d.title,
            TextStyle {
                font_size: font_px(32.0, 22.0, s),
                bold: true,
                ..TextStyle::default()
            },
            8.0,
        ),
        SceneBlock::Rule {
            width: 48.0 * s,
            height: 2.0,
            opacity: 0.5,
            margin_top: 24.0 + 16.0 * s,
        },
        text(
            BlockRole::Date,
            &d.date,
            TextStyle {
                font_size: font_px(18.0, 14.0, s),
                ..TextStyle::default()
            },
            16.0 * s,
        ),
        text(
            BlockRole::Time,
            &d.time,
            TextStyle {
                font_size: font_px(16.0, 13.0, s),
                opacity: 0.9,
                ..TextStyle::default()
            },
            0.0,
        ),
        text(
            BlockRole::Place,
            &d.place,
            TextStyle {
                font_size: font_px(16.0, 13.0, s),
                opacity: 0.9,
                ..TextStyle::default()
            },
            12.0 * s,
        ),
        text(
            BlockRole::Rsvp,
            &d.rsvp,
            TextStyle {
                font_size: font_px(13.0, 11.0, s),
                opacity: 0.7,
                ..TextStyle::default()
            },
            32.0 * s,
        ),
    ]
}

fn social_image(d: &SocialPost, size: Size) -> Option<ImagePlacement> {
    let bg = &d.background_image;
    let image = bg.image.as_ref()?;
    Some(ImagePlacement {
        image: image.clone(),
        rect: background_placement(size, image.size(), bg.zoom, bg.focal),
    })
}

fn overlay_style(role: OverlayRole, s: f64) -> TextStyle {
    match role {
        OverlayRole::Headline => TextStyle {
            font_size: font_px(56.0, 24.0, s),
            line_height: 1.15,
            bold: true,
            ..TextStyle::default()
        },
        OverlayRole::Subtext => TextStyle {
            font_size: font_px(28.0, 14.0, s),
            opacity: 0.9,
            ..TextStyle::default()
        },
        OverlayRole::Sticker => TextStyle {
            font_size: font_px(64.0, 24.0, s),
            line_height: 1.0,
            ..TextStyle::default()
        },
    }
}

fn social_overlays(d: &SocialPost, size: Size, s: f64) -> Vec<OverlayPlacement> {
    // Text overlays first, stickers on top; relative order within each group is kept.
    let (text_overlays, stickers): (Vec<_>, Vec<_>) = d
        .overlays
        .iter()
        .partition(|o| o.role != OverlayRole::Sticker);
    text_overlays
        .into_iter()
        .chain(stickers)
        .filter(|o| o.role == OverlayRole::Sticker || !o.text.is_empty())
        .map(|o| OverlayPlacement {
            id: o.id,
            role: o.role,
            text: o.text.clone(),
            center: normalized_to_pixel(o.position, size),
            scale: o.scale,
            rotation_deg: o.rotation_deg,
            style: overlay_style(o.role, s),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;
