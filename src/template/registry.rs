//! Static catalog of template kinds and social-post size presets.

use crate::foundation::core::Canvas;

/// The four editable template kinds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Front cover of a book.
    BookCover,
    /// Interior page of a book.
    BookPage,
    /// Portrait event invitation card.
    EventInvite,
    /// Social-media post; dimensions follow the selected [`SizePreset`].
    SocialPost,
}

/// Catalog entry describing one template kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateSpec {
    /// Kind this entry describes.
    pub kind: TemplateKind,
    /// Human-readable name for pickers.
    pub name: &'static str,
    /// Nominal pixel dimensions (the default preset for social posts).
    pub canvas: Canvas,
    /// One-line description shown under the name.
    pub description: &'static str,
}

impl TemplateKind {
    /// Every kind, in picker order.
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::BookCover,
        TemplateKind::BookPage,
        TemplateKind::EventInvite,
        TemplateKind::SocialPost,
    ];

    /// Stable kebab-case key, also used in export file names.
    pub fn key(self) -> &'static str {
        match self {
            TemplateKind::BookCover => "book-cover",
            TemplateKind::BookPage => "book-page",
            TemplateKind::EventInvite => "event-invite",
            TemplateKind::SocialPost => "social-post",
        }
    }

    /// Catalog entry for this kind.
    pub fn spec(self) -> TemplateSpec {
        match self {
            TemplateKind::BookCover => TemplateSpec {
                kind: self,
                name: "Book Cover",
                canvas: Canvas::new(405, 585),
                description: "Standard 6x9\" book cover (72 DPI)",
            },
            TemplateKind::BookPage => TemplateSpec {
                kind: self,
                name: "Book Page",
                canvas: Canvas::new(396, 612),
                description: "Standard 5.5x8.5\" interior page",
            },
            TemplateKind::EventInvite => TemplateSpec {
                kind: self,
                name: "Event Invite",
                canvas: Canvas::new(360, 504),
                description: "5x7\" invite (portrait)",
            },
            TemplateKind::SocialPost => {
                let preset = SizePreset::default().spec();
                TemplateSpec {
                    kind: self,
                    name: "Social Post",
                    canvas: preset.canvas,
                    description: preset.label,
                }
            }
        }
    }

    /// Nominal dimensions, taking the selected preset into account for social posts.
    ///
    /// `preset` is ignored for every other kind.
    pub fn canvas(self, preset: SizePreset) -> Canvas {
        match self {
            TemplateKind::SocialPost => preset.canvas(),
            _ => self.spec().canvas,
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for TemplateKind {
    type Err = crate::foundation::error::MyomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKind::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| {
                crate::foundation::error::MyomError::validation(format!(
                    "unknown template kind '{s}'"
                ))
            })
    }
}

/// Aspect-ratio presets for the social-post template.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SizePreset {
    /// 1080x1080 feed post.
    #[default]
    Square,
    /// 1080x1350 feed post.
    Portrait,
    /// 1080x566 feed post.
    Landscape,
    /// 1080x1920 story or reel cover.
    Story,
}

/// Catalog entry describing one [`SizePreset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizePresetSpec {
    pub preset: SizePreset,
    pub label: &'static str,
    pub canvas: Canvas,
    pub description: &'static str,
}

impl SizePreset {
    /// Every preset, in picker order.
    pub const ALL: [SizePreset; 4] = [
        SizePreset::Square,
        SizePreset::Portrait,
        SizePreset::Landscape,
        SizePreset::Story,
    ];

    pub fn spec(self) -> SizePresetSpec {
        match self {
            SizePreset::Square => SizePresetSpec {
                preset: self,
                label: "Square (1080x1080)",
                canvas: Canvas::new(1080, 1080),
                description: "Standard feed post",
            },
            SizePreset::Portrait => SizePresetSpec {
                preset: self,
                label: "Portrait (1080x1350)",
                canvas: Canvas::new(1080, 1350),
                description: "Portrait feed post",
            },
            SizePreset::Landscape => SizePresetSpec {
                preset: self,
                label: "Landscape (1080x566)",
                canvas: Canvas::new(1080, 566),
                description: "Landscape feed post",
            },
            SizePreset::Story => SizePresetSpec {
                preset: self,
                label: "Story / Reel (1080x1920)",
                canvas: Canvas::new(1080, 1920),
                description: "Story or Reel cover",
            },
        }
    }

    pub fn canvas(self) -> Canvas {
        self.spec().canvas
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/registry.rs"]
mod tests;
