//! Highlight frames derived from item slots.

use relics_types::{Color, Rect};

use crate::host::ItemHandle;

/// Margin kept between a highlight and its slot border, on every side.
pub const FRAME_INSET: f32 = 3.0;

/// A rectangle outline to draw over one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightFrame {
    pub rect: Rect,
    pub color: Color,
    pub thickness: f32,
}

/// Build the highlight for an accepted item.
///
/// The slot rectangle is inset by [`FRAME_INSET`] so neighbouring
/// highlights never touch each other's borders.
pub fn build_frame(item: &ItemHandle, color: Color, thickness: f32) -> HighlightFrame {
    HighlightFrame {
        rect: item.rect.inset(FRAME_INSET),
        color,
        thickness,
    }
}
