//! Software rendering of relic highlights
//!
//! [`PixmapPainter`] implements the core's [`FramePainter`] on top of a
//! `tiny-skia` pixmap. It backs the validation tool's PNG output and can
//! serve as the draw target of a transparent overlay window.
//!
//! [`FramePainter`]: relics_core::FramePainter

mod canvas;
pub mod utils;

pub use canvas::{CanvasError, PixmapPainter};
