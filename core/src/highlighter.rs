//! Highlight cache and polling scheduler
//!
//! ```text
//!             tick, interval elapsed, panel open
//!        ┌──────────────────────────────────────────┐
//!        │                                          ▼
//!     ┌──────┐                                ┌───────────┐
//!     │ Idle │                                │ Populated │──┐ tick, interval elapsed,
//!     └──────┘                                └───────────┘◄─┘ panel open (replace)
//!        ▲                                          │
//!        └──────────────────────────────────────────┘
//!             tick, interval elapsed, no panel
//! ```
//!
//! Ticks inside the interval change nothing. A scan builds its frames into a
//! fresh buffer and swaps it in only once complete, so `render` never sees a
//! half-built cache.

use std::time::{Duration, Instant};

use relics_types::{Color, RelicsSettings};

use crate::classify::{Eligibility, is_relic};
use crate::enumerate::enumerate_items;
use crate::frame::{HighlightFrame, build_frame};
use crate::host::UiSnapshot;
use crate::panel::{self, PanelState};
use crate::render::FramePainter;

/// Minimum time between two scans of the interface tree.
pub const UPDATE_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightState {
    /// No panel was open at the last scan (or no scan yet). Cache is empty.
    Idle,
    /// Cache holds the frames of the last scan.
    Populated,
}

#[derive(Debug, Clone)]
pub struct RelicHighlighter {
    frames: Vec<HighlightFrame>,
    state: HighlightState,
    last_scan: Instant,
    interval: Duration,
    color: Color,
    thickness: f32,
    eligibility: Eligibility,
}

impl RelicHighlighter {
    /// Create a highlighter whose interval timer starts now.
    pub fn new(settings: &RelicsSettings) -> Self {
        Self::starting_at(Instant::now(), settings)
    }

    /// Create a highlighter whose interval timer started at `start`.
    pub fn starting_at(start: Instant, settings: &RelicsSettings) -> Self {
        Self {
            frames: Vec::new(),
            state: HighlightState::Idle,
            last_scan: start,
            interval: UPDATE_INTERVAL,
            color: settings.frame_color,
            thickness: settings.frame_thickness,
            eligibility: Eligibility::default(),
        }
    }

    pub fn with_eligibility(mut self, eligibility: Eligibility) -> Self {
        self.eligibility = eligibility;
        self
    }

    /// Pick up new frame appearance. Takes effect from the next scan.
    pub fn apply_settings(&mut self, settings: &RelicsSettings) {
        self.color = settings.frame_color;
        self.thickness = settings.frame_thickness;
    }

    pub fn frames(&self) -> &[HighlightFrame] {
        &self.frames
    }

    pub fn state(&self) -> HighlightState {
        self.state
    }

    pub fn tick(&mut self, ui: &dyn UiSnapshot) -> bool {
        self.tick_at(ui, Instant::now())
    }

    /// Advance the scheduler to `now`.
    ///
    /// Returns `true` if the interval had elapsed and a scan ran.
    pub fn tick_at(&mut self, ui: &dyn UiSnapshot, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_scan) < self.interval {
            return false;
        }
        self.last_scan = now;

        match panel::detect(ui) {
            PanelState::None => {
                self.frames.clear();
                self.state = HighlightState::Idle;
            }
            open => {
                self.frames = self.scan(ui, open);
                self.state = HighlightState::Populated;
            }
        }
        true
    }

    /// Run enumerate, classify and build for an open panel.
    pub fn scan(&self, ui: &dyn UiSnapshot, state: PanelState) -> Vec<HighlightFrame> {
        let frames: Vec<HighlightFrame> = enumerate_items(ui, state)
            .iter()
            .filter(|item| is_relic(item) && self.eligibility.allows(item))
            .map(|item| build_frame(item, self.color, self.thickness))
            .collect();
        tracing::debug!(panel = ?state, frames = frames.len(), "Scan complete");
        frames
    }

    /// Draw the cached frames if a panel is open right now.
    ///
    /// The open check is made against the live tree rather than the cache, so
    /// a panel that closed since the last scan stops being drawn immediately.
    /// Returns the number of frames drawn.
    pub fn render(&self, ui: &dyn UiSnapshot, painter: &mut dyn FramePainter) -> usize {
        if !panel::detect(ui).is_open() {
            return 0;
        }
        for frame in &self.frames {
            painter.draw_frame(frame.rect, frame.color, frame.thickness);
        }
        self.frames.len()
    }
}
