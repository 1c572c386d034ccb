//! Partial updates. Each `update` merges the set fields of a patch over the current value and
//! returns a new value; the input is never mutated.

use crate::assets::image_ref::ImageRef;
use crate::document::model::{
    BackgroundImage, BookCover, BookPage, Document, EventInvite, FontKey, OverlayRole, SocialPost,
};
use crate::foundation::color::Color;
use crate::foundation::core::Point;
use crate::foundation::error::{MyomError, MyomResult};
use crate::template::registry::{SizePreset, TemplateKind};
use crate::transform::background::clamp_image_zoom;
use crate::transform::normalized::clamp_normalized;

fn merge<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        slot.clone_from(v);
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BookCoverPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub font: Option<FontKey>,
}

impl BookCover {
    pub fn update(&self, patch: &BookCoverPatch) -> BookCover {
        let mut out = self.clone();
        merge(&mut out.title, &patch.title);
        merge(&mut out.subtitle, &patch.subtitle);
        merge(&mut out.author, &patch.author);
        merge(&mut out.background, &patch.background);
        merge(&mut out.text_color, &patch.text_color);
        merge(&mut out.font, &patch.font);
        out
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BookPagePatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub page_number: Option<String>,
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub font: Option<FontKey>,
}

impl BookPage {
    pub fn update(&self, patch: &BookPagePatch) -> BookPage {
        let mut out = self.clone();
        merge(&mut out.title, &patch.title);
        merge(&mut out.body, &patch.body);
        merge(&mut out.page_number, &patch.page_number);
        merge(&mut out.background, &patch.background);
        merge(&mut out.text_color, &patch.text_color);
        merge(&mut out.font, &patch.font);
        out
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EventInvitePatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub place: Option<String>,
    pub rsvp: Option<String>,
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub font: Option<FontKey>,
}

impl EventInvite {
    pub fn update(&self, patch: &EventInvitePatch) -> EventInvite {
        let mut out = self.clone();
        merge(&mut out.title, &patch.title);
        merge(&mut out.subtitle, &patch.subtitle);
        merge(&mut out.date, &patch.date);
        merge(&mut out.time, &patch.time);
        merge(&mut out.place, &patch.place);
        merge(&mut out.rsvp, &patch.rsvp);
        merge(&mut out.background, &patch.background);
        merge(&mut out.text_color, &patch.text_color);
        merge(&mut out.font, &patch.font);
        out
    }
}

/// Partial update of a social post. Overlay positions and stickers are changed through the
/// overlay operations instead.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SocialPostPatch {
    /// Text of the headline overlay.
    pub headline: Option<String>,
    /// Text of the subtext overlay.
    pub subtext: Option<String>,
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub font: Option<FontKey>,
    /// Switching preset keeps overlay positions, which are normalized.
    pub size: Option<SizePreset>,
    /// `Some(None)` clears the image. Either way zoom and focal reset unless set here too. Not
    /// serialized.
    #[serde(skip)]
    pub image: Option<Option<ImageRef>>,
    /// Clamped to `[0.5, 2.0]`.
    pub image_zoom: Option<f64>,
    /// Clamped to `[0, 1]`.
    pub image_focal: Option<Point>,
}

impl SocialPost {
    pub fn update(&self, patch: &SocialPostPatch) -> SocialPost {
        let mut out = self.clone();
        for (role, text) in [
            (OverlayRole::Headline, &patch.headline),
            (OverlayRole::Subtext, &patch.subtext),
        ] {
            if let Some(text) = text {
                for o in out.overlays.iter_mut().filter(|o| o.role == role) {
                    o.text.clone_from(text);
                }
            }
        }
        merge(&mut out.background, &patch.background);
        merge(&mut out.text_color, &patch.text_color);
        merge(&mut out.font, &patch.font);
        merge(&mut out.size, &patch.size);

        let bg: &mut BackgroundImage = &mut out.background_image;
        if let Some(image) = &patch.image {
            // A new image starts from the default framing.
            *bg = BackgroundImage {
                image: image.clone(),
                ..BackgroundImage::default()
            };
        }
        if let Some(zoom) = patch.image_zoom {
            bg.zoom = clamp_image_zoom(zoom);
        }
        if let Some(focal) = patch.image_focal {
            bg.focal = clamp_normalized(focal);
        }
        out
    }
}

/// A patch for one template kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "kebab-case")]
pub enum DocumentPatch {
    BookCover(BookCoverPatch),
    BookPage(BookPagePatch),
    EventInvite(EventInvitePatch),
    SocialPost(SocialPostPatch),
}

impl Document {
    /// Merge `patch` into a new document.
    ///
    /// A patch for a different kind than the current document is rejected; field sets are not
    /// compatible across kinds.
    pub fn update(&self, patch: &DocumentPatch) -> MyomResult<Document> {
        Ok(match (self, patch) {
            (Document::BookCover(d), DocumentPatch::BookCover(p)) => {
                Document::BookCover(d.update(p))
            }
            (Document::BookPage(d), DocumentPatch::BookPage(p)) => Document::BookPage(d.update(p)),
            (Document::EventInvite(d), DocumentPatch::EventInvite(p)) => {
                Document::EventInvite(d.update(p))
            }
            (Document::SocialPost(d), DocumentPatch::SocialPost(p)) => {
                Document::SocialPost(d.update(p))
            }
            (doc, patch) => {
                return Err(MyomError::validation(format!(
                    "cannot apply {} patch to a {} document",
                    patch.kind(),
                    doc.kind()
                )));
            }
        })
    }
}

impl DocumentPatch {
    pub fn kind(&self) -> TemplateKind {
        match self {
            DocumentPatch::BookCover(_) => TemplateKind::BookCover,
            DocumentPatch::BookPage(_) => TemplateKind::BookPage,
            DocumentPatch::EventInvite(_) => TemplateKind::EventInvite,
            DocumentPatch::SocialPost(_) => TemplateKind::SocialPost,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/patch.rs"]
mod tests;
