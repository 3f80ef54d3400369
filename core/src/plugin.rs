//! Host plugin surface
//!
//! The host calls these hooks on a single execution context: `tick` once per
//! host update, `render` once per frame, never concurrently.

use relics_types::RelicsSettings;

use crate::highlighter::RelicHighlighter;
use crate::host::{Entity, UiSnapshot};
use crate::render::FramePainter;

/// Hooks the host invokes on a loaded plugin.
pub trait HostPlugin {
    fn name(&self) -> &str;

    /// One-time setup. Returning `false` tells the host the plugin failed to load.
    fn initialise(&mut self) -> bool {
        true
    }

    /// Called once per zone change.
    fn area_change(&mut self, _area: &str) {}

    /// Non-rendering work, called before `render`.
    fn tick(&mut self, ui: &dyn UiSnapshot);

    fn render(&mut self, ui: &dyn UiSnapshot, painter: &mut dyn FramePainter);

    /// Called once for every entity the host discovers.
    fn entity_added(&mut self, _entity: &Entity) {}
}

/// Highlights relics in the stash and the relic locker.
#[derive(Debug)]
pub struct RelicsPlugin {
    settings: RelicsSettings,
    highlighter: Option<RelicHighlighter>,
}

impl RelicsPlugin {
    pub fn new(settings: RelicsSettings) -> Self {
        Self {
            settings,
            highlighter: None,
        }
    }

    pub fn settings(&self) -> &RelicsSettings {
        &self.settings
    }

    pub fn update_settings(&mut self, settings: RelicsSettings) {
        if let Some(highlighter) = self.highlighter.as_mut() {
            highlighter.apply_settings(&settings);
        }
        self.settings = settings;
    }

    /// `None` until [`HostPlugin::initialise`] has run.
    pub fn highlighter(&self) -> Option<&RelicHighlighter> {
        self.highlighter.as_ref()
    }

    /// Mutable access, mainly for installing an eligibility rule.
    pub fn highlighter_mut(&mut self) -> Option<&mut RelicHighlighter> {
        self.highlighter.as_mut()
    }
}

impl HostPlugin for RelicsPlugin {
    fn name(&self) -> &str {
        "Relics"
    }

    fn initialise(&mut self) -> bool {
        self.highlighter = Some(RelicHighlighter::new(&self.settings));
        tracing::info!(enabled = self.settings.enable, "Relics plugin initialised");
        true
    }

    fn tick(&mut self, ui: &dyn UiSnapshot) {
        if !self.settings.enable {
            return;
        }
        if let Some(highlighter) = self.highlighter.as_mut() {
            highlighter.tick(ui);
        }
    }

    fn render(&mut self, ui: &dyn UiSnapshot, painter: &mut dyn FramePainter) {
        if !self.settings.enable {
            return;
        }
        if let Some(highlighter) = self.highlighter.as_ref() {
            highlighter.render(ui, painter);
        }
    }
}
