//! Pixmap-backed frame painter.

use std::path::Path;

use relics_core::FramePainter;
use relics_types::{Color, Rect, colors};
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::utils::{color_from_rgba, skia_rect};

/// Draws highlight frames onto an RGBA pixmap.
pub struct PixmapPainter {
    pixmap: Pixmap,
}

impl PixmapPainter {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    /// Reset every pixel to transparent
    pub fn clear(&mut self) {
        self.pixmap.fill(color_from_rgba(colors::TRANSPARENT));
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn save_png(&self, path: &Path) -> Result<(), CanvasError> {
        self.pixmap
            .save_png(path)
            .map_err(|e| CanvasError::Png(e.to_string()))
    }
}

impl FramePainter for PixmapPainter {
    fn draw_frame(&mut self, rect: Rect, color: Color, thickness: f32) {
        let Some(bounds) = skia_rect(rect) else {
            tracing::trace!(?rect, "Skipping degenerate frame");
            return;
        };
        let path = PathBuilder::from_rect(bounds);

        let mut paint = Paint::default();
        paint.set_color(color_from_rgba(color));
        paint.anti_alias = false;

        let stroke = Stroke {
            width: thickness,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

/// Errors from creating or exporting a canvas
#[derive(Debug)]
pub enum CanvasError {
    InvalidSize { width: u32, height: u32 },
    Png(String),
}

impl std::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "Invalid canvas size {}x{}", width, height)
            }
            Self::Png(msg) => write!(f, "PNG encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for CanvasError {}
