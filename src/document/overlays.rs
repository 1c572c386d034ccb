//! Pure operations over overlay lists. Every operation returns a new list and leaves the input
//! untouched; unknown identities are tolerated as no-ops.

use crate::document::model::{Overlay, OverlayId, OverlayRole, SUBTEXT_ID};
use crate::foundation::core::Point;
use crate::transform::normalized::clamp01;

/// Session-scoped source of fresh overlay identities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayIdGen {
    next: u64,
}

impl Default for OverlayIdGen {
    fn default() -> Self {
        Self {
            next: SUBTEXT_ID.0 + 1,
        }
    }
}

impl OverlayIdGen {
    /// Generator that will never hand out an id already used in `list`.
    pub fn after(list: &[Overlay]) -> Self {
        let mut ids = Self::default();
        ids.observe(list);
        ids
    }

    /// Bump past every id in `list`.
    pub fn observe(&mut self, list: &[Overlay]) {
        if let Some(max) = list.iter().map(|o| o.id.0).max() {
            self.next = self.next.max(max.saturating_add(1));
        }
    }

    pub fn next_id(&mut self) -> OverlayId {
        let id = OverlayId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Partial edit of one overlay's non-positional fields.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayEdit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Clamped to `>= 0` when applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_deg: Option<f64>,
}

/// Move overlay `id` to `(x, y)`, clamped to `[0, 1]`. Order and other entries are unchanged.
pub fn move_overlay(list: &[Overlay], id: OverlayId, x: f64, y: f64) -> Vec<Overlay> {
    list.iter()
        .map(|o| {
            if o.id == id {
                Overlay {
                    position: Point::new(clamp01(x), clamp01(y)),
                    ..o.clone()
                }
            } else {
                o.clone()
            }
        })
        .collect()
}

/// Append a sticker with a fresh identity at the default position.
pub fn add_sticker(
    list: &[Overlay],
    ids: &mut OverlayIdGen,
    text: impl Into<String>,
) -> Vec<Overlay> {
    let mut out = list.to_vec();
    out.push(Overlay::sticker(ids.next_id(), text));
    out
}

/// Apply `edit` to overlay `id`.
pub fn edit_overlay(list: &[Overlay], id: OverlayId, edit: &OverlayEdit) -> Vec<Overlay> {
    list.iter()
        .map(|o| {
            if o.id != id {
                return o.clone();
            }
            let mut o = o.clone();
            if let Some(text) = &edit.text {
                o.text.clone_from(text);
            }
            if let Some(scale) = edit.scale {
                o.scale = if scale.is_nan() { 0.0 } else { scale.max(0.0) };
            }
            if let Some(rotation) = edit.rotation_deg
                && rotation.is_finite()
            {
                o.rotation_deg = rotation;
            }
            o
        })
        .collect()
}

/// Remove sticker `id`. Headline and subtext overlays are kept.
pub fn remove_overlay(list: &[Overlay], id: OverlayId) -> Vec<Overlay> {
    list.iter()
        .filter(|o| !(o.id == id && o.role == OverlayRole::Sticker))
        .cloned()
        .collect()
}

pub fn sticker_count(list: &[Overlay]) -> usize {
    list.iter()
        .filter(|o| o.role == OverlayRole::Sticker)
        .count()
}

#[cfg(test)]
#[path = "../../tests/unit/document/overlays.rs"]
mod tests;
