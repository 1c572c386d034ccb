use crate::assets::image_ref::ImageRef;
use crate::document::model::{OverlayId, OverlayRole};
use crate::foundation::color::Color;
use crate::foundation::core::{Point, Rect, Size};
use crate::template::registry::TemplateKind;

/// Everything a renderer needs to paint one template at one display scale.
///
/// All lengths are in on-screen pixels, already multiplied by the display scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub kind: TemplateKind,
    /// Size of the template box.
    pub size: Size,
    pub display_scale: f64,
    pub background: Color,
    pub text_color: Color,
    pub font_family: &'static str,
    /// Inner padding of the template box.
    pub padding: f64,
    /// How `blocks` flow inside the padded box.
    pub arrangement: Arrangement,
    /// Drawn above the background color, below everything else.
    pub background_image: Option<ImagePlacement>,
    /// Flowed content, in document order.
    pub blocks: Vec<SceneBlock>,
    /// Absolutely positioned overlays, in paint order (topmost last).
    pub overlays: Vec<OverlayPlacement>,
}

/// Vertical distribution of flowed blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrangement {
    /// Blocks pushed to the bottom edge (book cover).
    Bottom,
    /// Blocks from the top, body stretching to fill (book page).
    Top,
    /// Blocks centered both ways (event invite).
    Center,
    /// No flowed blocks; everything is an overlay (social post).
    Free,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneBlock {
    Text(TextBlock),
    /// Horizontal decorative line in the text color.
    Rule {
        width: f64,
        height: f64,
        opacity: f32,
        margin_top: f64,
    },
}

/// Semantic slot of a flowed text block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockRole {
    Title,
    Subtitle,
    Author,
    Body,
    PageNumber,
    Date,
    Time,
    Place,
    Rsvp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub role: BlockRole,
    pub text: String,
    pub style: TextStyle,
    pub margin_top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub line_height: f64,
    pub bold: bool,
    pub italic: bool,
    pub uppercase: bool,
    /// Extra spacing between letters, in em.
    pub letter_spacing_em: f64,
    pub opacity: f32,
    /// Honor embedded newlines.
    pub preserve_newlines: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            line_height: 1.4,
            bold: false,
            italic: false,
            uppercase: false,
            letter_spacing_em: 0.0,
            opacity: 1.0,
            preserve_newlines: false,
        }
    }
}

/// Background image and the rectangle it covers, relative to the template box.
#[derive(Clone, Debug, PartialEq)]
pub struct ImagePlacement {
    pub image: ImageRef,
    pub rect: Rect,
}

/// One overlay positioned in template-box pixels.
///
/// `center` is where the overlay's own box must be centered; the renderer translates by half of
/// the rendered width/height.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayPlacement {
    pub id: OverlayId,
    pub role: OverlayRole,
    pub text: String,
    pub center: Point,
    pub scale: f64,
    pub rotation_deg: f64,
    pub style: TextStyle,
}
