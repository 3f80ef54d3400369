//! Shared types for the relic highlighter.
//!
//! Geometry and settings live here so the core pipeline, the pixmap
//! overlay and the validation tool agree on one representation.

pub mod geometry;
pub mod settings;

pub use geometry::Rect;
pub use settings::{Color, RelicsSettings, colors};
