//! Drawing primitive supplied by the host renderer.

use relics_types::{Color, Rect};

use crate::frame::HighlightFrame;

pub trait FramePainter {
    /// Stroke the outline of `rect`. Fire and forget.
    fn draw_frame(&mut self, rect: Rect, color: Color, thickness: f32);
}

/// Painter that keeps every draw call, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    pub frames: Vec<HighlightFrame>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FramePainter for RecordingPainter {
    fn draw_frame(&mut self, rect: Rect, color: Color, thickness: f32) {
        self.frames.push(HighlightFrame {
            rect,
            color,
            thickness,
        });
    }
}
