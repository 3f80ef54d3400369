//! Conversions between shared types and tiny-skia types

use relics_types::Rect;
use tiny_skia::Color;

/// Convert [u8; 4] RGBA array to tiny_skia Color
#[inline]
pub fn color_from_rgba(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Convert a render-space rectangle, `None` if it is empty or inverted
pub fn skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
}
