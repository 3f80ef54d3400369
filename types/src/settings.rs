//! User-facing settings.
//!
//! Every field carries a serde default so a partial (or empty) settings
//! file still deserializes.

use serde::{Deserialize, Serialize};

/// RGBA color, one byte per channel.
pub type Color = [u8; 4];

/// Named colors used by the highlighter.
pub mod colors {
    use super::Color;

    pub const RED: Color = [255, 0, 0, 255];
    pub const TRANSPARENT: Color = [0, 0, 0, 0];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelicsSettings {
    /// Master switch. When off, ticks and render passes are skipped entirely.
    pub enable: bool,
    /// Stroke color of the highlight frames
    pub frame_color: Color,
    /// Stroke thickness of the highlight frames
    pub frame_thickness: f32,
}

impl Default for RelicsSettings {
    fn default() -> Self {
        Self {
            enable: true,
            frame_color: colors::RED,
            frame_thickness: 2.0,
        }
    }
}
