//! Builders for frozen interface trees shared by the unit tests.

use std::cell::Cell;

use relics_types::Rect;

use crate::host::{Address, Entity, EntityType, ItemHandle, UiSnapshot};
use crate::snapshot::{StaticElement, StaticSnapshot, StaticStash};

pub const RELIC_PATH: &str = "Metadata/Items/Relics/RelicUnique01";
pub const SWORD_PATH: &str = "Metadata/Items/Weapons/OneHandWeapons/Sword01";

pub fn slot_rect(index: usize) -> Rect {
    Rect::new(20.0 + index as f32 * 60.0, 200.0, 58.0, 58.0)
}

pub fn item(address: u64, kind: EntityType, path: &str, rect: Rect) -> ItemHandle {
    ItemHandle {
        address: Address(address),
        entity: Some(Entity {
            kind,
            path: path.to_string(),
        }),
        rect,
    }
}

/// Item slot element backed by an entity.
pub fn slot(address: u64, index: usize, kind: EntityType, path: &str) -> StaticElement {
    StaticElement {
        entity: Some(Entity {
            kind,
            path: path.to_string(),
        }),
        ..StaticElement::new(address, slot_rect(index))
    }
}

/// Slot element with no backing entity.
pub fn empty_slot(address: u64, index: usize) -> StaticElement {
    StaticElement::new(address, slot_rect(index))
}

fn container(address: u64, height: f32, children: Vec<StaticElement>) -> StaticElement {
    StaticElement {
        children,
        ..StaticElement::new(address, Rect::new(0.0, 0.0, 600.0, height))
    }
}

/// Left panel holding a visible "Relic Locker" label and the three nested
/// containers, heights 150, 120 and 130, with `slots` in the innermost one.
pub fn locker_panel(slots: Vec<StaticElement>) -> StaticElement {
    let label = StaticElement {
        text: Some("Relic Locker".to_string()),
        ..StaticElement::new(0x1001, Rect::new(0.0, 0.0, 600.0, 40.0))
    };
    let innermost = container(0x1400, 130.0, slots);
    let inner = container(
        0x1300,
        120.0,
        vec![StaticElement::new(0x1301, Rect::new(0.0, 0.0, 600.0, 24.0)), innermost],
    );
    let outer = container(0x1200, 150.0, vec![inner]);
    StaticElement {
        children: vec![label, outer],
        ..StaticElement::new(0x1000, Rect::new(0.0, 0.0, 600.0, 900.0))
    }
}

pub fn locker_snapshot(slots: Vec<StaticElement>) -> StaticSnapshot {
    StaticSnapshot {
        stash: None,
        left_panel: Some(locker_panel(slots)),
    }
}

pub fn stash_snapshot(items: Vec<ItemHandle>) -> StaticSnapshot {
    StaticSnapshot {
        stash: Some(StaticStash {
            address: Address(0x10),
            visible: true,
            items: Some(items),
        }),
        left_panel: None,
    }
}

/// Eight slots, three of which are valid relic items (0x2001, 0x2004, 0x2007).
pub fn mixed_locker_slots() -> Vec<StaticElement> {
    let mut unresolvable = slot(0x2002, 2, EntityType::Item, RELIC_PATH);
    unresolvable.resolvable = false;
    vec![
        empty_slot(0x2000, 0),
        slot(0x2001, 1, EntityType::Item, RELIC_PATH),
        unresolvable,
        slot(0x2003, 3, EntityType::Monster, RELIC_PATH),
        slot(0x2004, 4, EntityType::Item, "Metadata/Items/Relics/RelicFragment"),
        slot(0x2005, 5, EntityType::Item, SWORD_PATH),
        empty_slot(0x2006, 6),
        slot(0x2007, 7, EntityType::Item, RELIC_PATH),
    ]
}

/// Wraps a snapshot and counts the queries only enumeration makes.
pub struct CountingSnapshot {
    pub inner: StaticSnapshot,
    pub stash_item_reads: Cell<usize>,
    pub item_resolves: Cell<usize>,
}

impl CountingSnapshot {
    pub fn new(inner: StaticSnapshot) -> Self {
        Self {
            inner,
            stash_item_reads: Cell::new(0),
            item_resolves: Cell::new(0),
        }
    }

    pub fn enumeration_calls(&self) -> usize {
        self.stash_item_reads.get() + self.item_resolves.get()
    }
}

impl UiSnapshot for CountingSnapshot {
    fn stash_element(&self) -> Option<Address> {
        self.inner.stash_element()
    }

    fn open_left_panel(&self) -> Option<Address> {
        self.inner.open_left_panel()
    }

    fn is_visible(&self, element: Address) -> Option<bool> {
        self.inner.is_visible(element)
    }

    fn children(&self, element: Address) -> Option<Vec<Address>> {
        self.inner.children(element)
    }

    fn text(&self, element: Address) -> Option<String> {
        self.inner.text(element)
    }

    fn client_rect(&self, element: Address) -> Option<Rect> {
        self.inner.client_rect(element)
    }

    fn has_entity(&self, element: Address) -> bool {
        self.inner.has_entity(element)
    }

    fn resolve_item(&self, address: Address) -> Option<ItemHandle> {
        self.item_resolves.set(self.item_resolves.get() + 1);
        self.inner.resolve_item(address)
    }

    fn visible_stash_items(&self) -> Option<Vec<ItemHandle>> {
        self.stash_item_reads.set(self.stash_item_reads.get() + 1);
        self.inner.visible_stash_items()
    }
}
