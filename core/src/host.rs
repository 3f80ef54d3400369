//! Read-only view of the host's interface tree.
//!
//! The host owns every element and item. This crate only ever holds an
//! [`Address`] or a short-lived [`ItemHandle`] for the length of one polling
//! cycle.

use std::fmt;

use relics_types::Rect;
use serde::{Deserialize, Serialize};

/// Address of an element (or item) in the host's memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub u64);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}

/// Entity type tag as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Item,
    Monster,
    Npc,
    Player,
    Chest,
    MiscellaneousObject,
    Effect,
}

/// Game entity backing an inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: EntityType,
    /// Metadata path identifying the item's kind, e.g. `Metadata/Items/Relics/Relic01`
    pub path: String,
}

/// One inventory item as exposed by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemHandle {
    pub address: Address,
    /// Backing entity. `None` when the host could not read it this frame.
    #[serde(default)]
    pub entity: Option<Entity>,
    /// On-screen slot rectangle
    pub rect: Rect,
}

/// Queries against the host's interface state.
///
/// Every query is optional: a missing or stale element anywhere in a lookup
/// chain comes back as `None` (or `false`) and callers treat it as "not open"
/// or "no items". None of these are errors.
pub trait UiSnapshot {
    /// The stash view element, if the host exposes one.
    fn stash_element(&self) -> Option<Address>;

    /// Whatever panel is currently docked on the left side of the screen.
    fn open_left_panel(&self) -> Option<Address>;

    fn is_visible(&self, element: Address) -> Option<bool>;

    /// Direct children in host order.
    fn children(&self, element: Address) -> Option<Vec<Address>>;

    /// Label text of the element.
    fn text(&self, element: Address) -> Option<String>;

    /// Bounding rectangle in render-space coordinates.
    fn client_rect(&self, element: Address) -> Option<Rect>;

    /// Whether the element is backed by a game entity.
    fn has_entity(&self, element: Address) -> bool;

    /// Reinterpret the object at `address` as an inventory item.
    ///
    /// Failure is frequent and expected (most elements are not items).
    fn resolve_item(&self, address: Address) -> Option<ItemHandle>;

    /// Typed item list of the stash tab currently shown.
    fn visible_stash_items(&self) -> Option<Vec<ItemHandle>>;

    /// Visibility with absence collapsed to `false`.
    fn is_shown(&self, element: Address) -> bool {
        self.is_visible(element).unwrap_or(false)
    }
}
