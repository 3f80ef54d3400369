//! Relic highlighting pipeline
//!
//! ```text
//! tick ──► panel::detect ──► enumerate_items ──► classify ──► build_frame
//!                                                                 │
//!                                                                 ▼
//! render ◄──────────────────────────────── RelicHighlighter (frame cache)
//! ```
//!
//! The host application is reached only through [`UiSnapshot`] (reads) and
//! [`FramePainter`] (draw calls). Everything between them is plain data.

pub mod classify;
pub mod config;
pub mod enumerate;
pub mod frame;
pub mod highlighter;
pub mod host;
pub mod panel;
pub mod plugin;
pub mod render;
pub mod snapshot;

#[cfg(test)]
mod test_support;

pub use classify::{Eligibility, is_relic};
pub use config::ConfigError;
pub use enumerate::{ItemEnumerator, RelicLockerItems, StashItems, enumerate_items};
pub use frame::{HighlightFrame, build_frame};
pub use highlighter::{HighlightState, RelicHighlighter, UPDATE_INTERVAL};
pub use host::{Address, Entity, EntityType, ItemHandle, UiSnapshot};
pub use panel::{PanelState, detect};
pub use plugin::{HostPlugin, RelicsPlugin};
pub use render::{FramePainter, RecordingPainter};
pub use snapshot::{SnapshotError, StaticSnapshot};

pub use relics_types::{Color, Rect, RelicsSettings};
