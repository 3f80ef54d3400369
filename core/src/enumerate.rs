//! Item enumeration strategies.
//!
//! The stash hands us a typed item list. The relic locker does not, so its
//! items are recovered by walking the raw element tree and resolving each
//! slot by address. Both sit behind [`ItemEnumerator`] so the tree walk can be
//! swapped for a typed accessor without touching the scheduler.

use crate::classify::RELIC_PATH_MARKER;
use crate::host::{Address, EntityType, ItemHandle, UiSnapshot};
use crate::panel::PanelState;

/// Containers on the way down to the relic locker slots are the first child
/// taller than this.
pub const LOCKER_MIN_HEIGHT: f32 = 100.0;

/// Number of nested containers between the left panel and the slots.
pub const LOCKER_DEPTH: usize = 3;

pub trait ItemEnumerator {
    /// Items of the open view, in host order.
    fn enumerate(&self, ui: &dyn UiSnapshot) -> Vec<ItemHandle>;
}

/// Typed item list of the visible stash tab, unfiltered.
#[derive(Debug, Clone, Copy, Default)]
pub struct StashItems;

impl ItemEnumerator for StashItems {
    fn enumerate(&self, ui: &dyn UiSnapshot) -> Vec<ItemHandle> {
        ui.visible_stash_items().unwrap_or_default()
    }
}

/// Geometry-based walk of the relic locker's element tree.
///
/// Fragile by nature: any layout change in the host's locker makes the walk
/// miss and the result comes back empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelicLockerItems;

impl ItemEnumerator for RelicLockerItems {
    fn enumerate(&self, ui: &dyn UiSnapshot) -> Vec<ItemHandle> {
        let Some(container) = find_locker_container(ui) else {
            tracing::debug!("Relic locker container not found");
            return Vec::new();
        };

        let children = ui.children(container).unwrap_or_default();
        tracing::debug!(
            address = %container,
            visible = ui.is_shown(container),
            child_count = children.len(),
            "Relic locker container"
        );

        let items: Vec<ItemHandle> = children
            .into_iter()
            .filter_map(|child| resolve_locker_slot(ui, child))
            .collect();

        tracing::debug!(count = items.len(), "Relic locker items");
        items
    }
}

/// Run the strategy matching the open panel.
pub fn enumerate_items(ui: &dyn UiSnapshot, state: PanelState) -> Vec<ItemHandle> {
    match state {
        PanelState::StashOpen => StashItems.enumerate(ui),
        PanelState::RelicLockerOpen => RelicLockerItems.enumerate(ui),
        PanelState::None => Vec::new(),
    }
}

/// Descend [`LOCKER_DEPTH`] levels from the left panel, following the first
/// tall child each time. Returns the element whose children are item slots.
pub fn find_locker_container(ui: &dyn UiSnapshot) -> Option<Address> {
    let mut current = ui.open_left_panel()?;
    for _ in 0..LOCKER_DEPTH {
        current = first_tall_child(ui, current)?;
    }
    Some(current)
}

fn first_tall_child(ui: &dyn UiSnapshot, element: Address) -> Option<Address> {
    ui.children(element)?.into_iter().find(|&child| {
        ui.client_rect(child)
            .is_some_and(|rect| rect.height > LOCKER_MIN_HEIGHT)
    })
}

fn resolve_locker_slot(ui: &dyn UiSnapshot, slot: Address) -> Option<ItemHandle> {
    if !ui.has_entity(slot) {
        tracing::trace!(address = %slot, "Slot has no entity");
        return None;
    }

    let Some(item) = ui.resolve_item(slot) else {
        tracing::trace!(address = %slot, "Slot is not an inventory item");
        return None;
    };

    let Some(entity) = item.entity.as_ref() else {
        tracing::trace!(address = %slot, "Resolved item has no entity");
        return None;
    };

    if entity.kind != EntityType::Item {
        tracing::trace!(address = %slot, kind = ?entity.kind, "Slot is not an item");
        return None;
    }

    if !entity.path.contains(RELIC_PATH_MARKER) {
        tracing::trace!(address = %slot, path = %entity.path, "Slot is not a relic");
        return None;
    }

    Some(item)
}
