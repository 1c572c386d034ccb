//! Per-kind editable field sets and their defaults.

use crate::assets::image_ref::ImageRef;
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{MyomError, MyomResult};
use crate::template::registry::{SizePreset, TemplateKind};
use crate::transform::background::{MAX_IMAGE_ZOOM, MIN_IMAGE_ZOOM};

/// Stable identity of an overlay within an editing session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct OverlayId(pub u64);

/// Identity of the default headline overlay.
pub const HEADLINE_ID: OverlayId = OverlayId(1);
/// Identity of the default subtext overlay.
pub const SUBTEXT_ID: OverlayId = OverlayId(2);

/// What an overlay represents; drives its text style and whether it can be removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayRole {
    Headline,
    Subtext,
    Sticker,
}

/// A positionable text or sticker element drawn above the background.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Overlay {
    pub id: OverlayId,
    pub role: OverlayRole,
    pub text: String,
    /// Center of the overlay, normalized to the template box. Always in `[0, 1]`.
    pub position: Point,
    /// Uniform scale; never negative.
    pub scale: f64,
    pub rotation_deg: f64,
}

impl Overlay {
    /// Default position for newly added stickers.
    pub const DEFAULT_POSITION: Point = Point::new(0.5, 0.5);

    /// A sticker at the default position, unscaled and unrotated.
    pub fn sticker(id: OverlayId, text: impl Into<String>) -> Self {
        Self {
            id,
            role: OverlayRole::Sticker,
            text: text.into(),
            position: Self::DEFAULT_POSITION,
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }

    fn text_overlay(id: OverlayId, role: OverlayRole, text: &str, position: Point) -> Self {
        Self {
            id,
            role,
            text: text.to_owned(),
            position,
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }
}

/// Font choice offered by the property editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontKey {
    Georgia,
    Playfair,
    DmSans,
    Helvetica,
}

impl FontKey {
    pub const ALL: [FontKey; 4] = [
        FontKey::Georgia,
        FontKey::Playfair,
        FontKey::DmSans,
        FontKey::Helvetica,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FontKey::Georgia => "Georgia",
            FontKey::Playfair => "Playfair Display",
            FontKey::DmSans => "DM Sans",
            FontKey::Helvetica => "Helvetica",
        }
    }

    /// Family stack handed to the renderer, most preferred first.
    pub fn family(self) -> &'static str {
        match self {
            FontKey::Georgia => "Georgia, \"Times New Roman\", serif",
            FontKey::Playfair => "\"Playfair Display\", Georgia, serif",
            FontKey::DmSans => "\"DM Sans\", \"Helvetica Neue\", sans-serif",
            FontKey::Helvetica => "\"Helvetica Neue\", Helvetica, Arial, sans-serif",
        }
    }
}

/// Background image plus its zoom and focal point.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackgroundImage {
    /// Encoded image; not serialized.
    #[serde(skip)]
    pub image: Option<ImageRef>,
    /// In `[0.5, 2.0]`.
    pub zoom: f64,
    /// Fraction of the image anchored at the container center. Always in `[0, 1]`.
    pub focal: Point,
}

impl Default for BackgroundImage {
    fn default() -> Self {
        Self {
            image: None,
            zoom: 1.0,
            focal: Point::new(0.5, 0.5),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BookCover {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub background: Color,
    pub text_color: Color,
    pub font: FontKey,
}

impl Default for BookCover {
    fn default() -> Self {
        Self {
            title: "Your Book Title".to_owned(),
            subtitle: "A compelling subtitle here".to_owned(),
            author: "Author Name".to_owned(),
            background: Color::rgb(0x1a, 0x1a, 0x2e),
            text_color: Color::rgb(0xea, 0xea, 0xea),
            font: FontKey::Georgia,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BookPage {
    pub title: String,
    pub body: String,
    pub page_number: String,
    pub background: Color,
    pub text_color: Color,
    pub font: FontKey,
}

impl Default for BookPage {
    fn default() -> Self {
        Self {
            title: "Chapter One".to_owned(),
            body: "Your story begins here. Replace this with your own text and style the page \
                   to match your book."
                .to_owned(),
            page_number: "1".to_owned(),
            background: Color::rgb(0xfa, 0xf8, 0xf5),
            text_color: Color::rgb(0x1a, 0x1a, 0x1a),
            font: FontKey::Georgia,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventInvite {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub time: String,
    pub place: String,
    pub rsvp: String,
    pub background: Color,
    pub text_color: Color,
    pub font: FontKey,
}

impl Default for EventInvite {
    fn default() -> Self {
        Self {
            title: "You're Invited".to_owned(),
            subtitle: "To a special evening".to_owned(),
            date: "Saturday, March 15".to_owned(),
            time: "7:00 PM".to_owned(),
            place: "123 Main Street".to_owned(),
            rsvp: "RSVP by March 1 \u{2022} name@email.com".to_owned(),
            background: Color::rgb(0x0f, 0x17, 0x2a),
            text_color: Color::rgb(0xf8, 0xfa, 0xfc),
            font: FontKey::Playfair,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SocialPost {
    pub background: Color,
    pub text_color: Color,
    pub font: FontKey,
    pub size: SizePreset,
    /// Headline, subtext and stickers, in paint order.
    pub overlays: Vec<Overlay>,
    pub background_image: BackgroundImage,
}

impl Default for SocialPost {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x0f, 0x0f, 0x23),
            text_color: Color::rgb(0xff, 0xff, 0xff),
            font: FontKey::DmSans,
            size: SizePreset::Square,
            overlays: vec![
                Overlay::text_overlay(
                    HEADLINE_ID,
                    OverlayRole::Headline,
                    "Your Headline",
                    Point::new(0.5, 0.45),
                ),
                Overlay::text_overlay(
                    SUBTEXT_ID,
                    OverlayRole::Subtext,
                    "Supporting text or CTA",
                    Point::new(0.5, 0.6),
                ),
            ],
            background_image: BackgroundImage::default(),
        }
    }
}

impl SocialPost {
    /// First overlay with `role`, if any.
    pub fn overlay_with_role(&self, role: OverlayRole) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.role == role)
    }

    pub fn headline(&self) -> &str {
        self.overlay_with_role(OverlayRole::Headline)
            .map_or("", |o| o.text.as_str())
    }

    pub fn subtext(&self) -> &str {
        self.overlay_with_role(OverlayRole::Subtext)
            .map_or("", |o| o.text.as_str())
    }
}

/// The edited template: one payload per [`TemplateKind`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "kebab-case")]
pub enum Document {
    BookCover(BookCover),
    BookPage(BookPage),
    EventInvite(EventInvite),
    SocialPost(SocialPost),
}

impl Default for Document {
    fn default() -> Self {
        Self::default_for(TemplateKind::BookCover)
    }
}

impl Document {
    /// Fresh default document for `kind`.
    pub fn default_for(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::BookCover => Document::BookCover(BookCover::default()),
            TemplateKind::BookPage => Document::BookPage(BookPage::default()),
            TemplateKind::EventInvite => Document::EventInvite(EventInvite::default()),
            TemplateKind::SocialPost => Document::SocialPost(SocialPost::default()),
        }
    }

    pub fn kind(&self) -> TemplateKind {
        match self {
            Document::BookCover(_) => TemplateKind::BookCover,
            Document::BookPage(_) => TemplateKind::BookPage,
            Document::EventInvite(_) => TemplateKind::EventInvite,
            Document::SocialPost(_) => TemplateKind::SocialPost,
        }
    }

    /// Canonical pixel dimensions; also the export target size.
    pub fn canvas(&self) -> Canvas {
        match self {
            Document::SocialPost(d) => d.size.canvas(),
            _ => self.kind().spec().canvas,
        }
    }

    pub fn background(&self) -> Color {
        match self {
            Document::BookCover(d) => d.background,
            Document::BookPage(d) => d.background,
            Document::EventInvite(d) => d.background,
            Document::SocialPost(d) => d.background,
        }
    }

    pub fn text_color(&self) -> Color {
        match self {
            Document::BookCover(d) => d.text_color,
            Document::BookPage(d) => d.text_color,
            Document::EventInvite(d) => d.text_color,
            Document::SocialPost(d) => d.text_color,
        }
    }

    pub fn font(&self) -> FontKey {
        match self {
            Document::BookCover(d) => d.font,
            Document::BookPage(d) => d.font,
            Document::EventInvite(d) => d.font,
            Document::SocialPost(d) => d.font,
        }
    }

    /// Draggable overlays; empty for kinds without any.
    pub fn overlays(&self) -> &[Overlay] {
        match self {
            Document::SocialPost(d) => &d.overlays,
            Document::BookCover(_) | Document::BookPage(_) | Document::EventInvite(_) => &[],
        }
    }

    /// Validate geometry and overlay identity of a document built outside the editor.
    pub fn validate(&self) -> MyomResult<()> {
        match self {
            Document::SocialPost(d) => d.validate(),
            Document::BookCover(_) | Document::BookPage(_) | Document::EventInvite(_) => Ok(()),
        }
    }
}

fn in_unit_range(p: Point) -> bool {
    (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)
}

impl SocialPost {
    pub fn validate(&self) -> MyomResult<()> {
        let mut seen = std::collections::HashSet::with_capacity(self.overlays.len());
        for o in &self.overlays {
            if !seen.insert(o.id) {
                return Err(MyomError::validation(format!(
                    "duplicate overlay id {}",
                    o.id.0
                )));
            }
            if !in_unit_range(o.position) {
                return Err(MyomError::validation(format!(
                    "overlay {} position ({}, {}) must be within [0, 1]",
                    o.id.0, o.position.x, o.position.y
                )));
            }
            if !o.scale.is_finite() || o.scale < 0.0 {
                return Err(MyomError::validation(format!(
                    "overlay {} scale must be finite and >= 0, got {}",
                    o.id.0, o.scale
                )));
            }
            if !o.rotation_deg.is_finite() {
                return Err(MyomError::validation(format!(
                    "overlay {} rotation must be finite",
                    o.id.0
                )));
            }
        }

        let bg = &self.background_image;
        if !(MIN_IMAGE_ZOOM..=MAX_IMAGE_ZOOM).contains(&bg.zoom) {
            return Err(MyomError::validation(format!(
                "background zoom must be within [{MIN_IMAGE_ZOOM}, {MAX_IMAGE_ZOOM}], got {}",
                bg.zoom
            )));
        }
        if !in_unit_range(bg.focal) {
            return Err(MyomError::validation(format!(
                "background focal ({}, {}) must be within [0, 1]",
                bg.focal.x, bg.focal.y
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
