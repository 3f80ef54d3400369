//! Which item view, if any, is currently open.

use crate::host::{Address, UiSnapshot};

/// Label text identifying the relic locker among the left panel's children
pub const RELIC_LOCKER_LABEL: &str = "Relic Locker";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    None,
    StashOpen,
    RelicLockerOpen,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        self != PanelState::None
    }
}

/// Derive the panel state from the current interface tree.
///
/// The stash takes precedence: if it is visible the relic locker is never
/// consulted.
pub fn detect(ui: &dyn UiSnapshot) -> PanelState {
    if is_stash_open(ui) {
        PanelState::StashOpen
    } else if is_relic_locker_open(ui) {
        PanelState::RelicLockerOpen
    } else {
        PanelState::None
    }
}

pub fn is_stash_open(ui: &dyn UiSnapshot) -> bool {
    ui.stash_element().is_some_and(|stash| ui.is_shown(stash))
}

pub fn is_relic_locker_open(ui: &dyn UiSnapshot) -> bool {
    let Some(left_panel) = ui.open_left_panel() else {
        return false;
    };

    let has_locker_child = ui
        .children(left_panel)
        .unwrap_or_default()
        .into_iter()
        .any(|child| is_locker_label(ui, child));
    tracing::debug!(visible = has_locker_child, "Relic locker label check");

    has_locker_child && ui.is_shown(left_panel)
}

fn is_locker_label(ui: &dyn UiSnapshot, element: Address) -> bool {
    ui.text(element)
        .is_some_and(|text| text.contains(RELIC_LOCKER_LABEL))
        && ui.is_shown(element)
}
