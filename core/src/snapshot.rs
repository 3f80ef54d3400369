//! In-memory interface tree implementing [`UiSnapshot`].
//!
//! Used by the validation tool and the test suites to describe a frozen
//! host state in TOML:
//!
//! ```toml
//! [stash]
//! address = 16
//! visible = false
//!
//! [left_panel]
//! address = 256
//! rect = { x = 0.0, y = 0.0, width = 600.0, height = 900.0 }
//!
//! [[left_panel.children]]
//! address = 257
//! text = "Relic Locker"
//! rect = { x = 0.0, y = 0.0, width = 600.0, height = 40.0 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use relics_types::Rect;
use serde::{Deserialize, Serialize};

use crate::host::{Address, Entity, ItemHandle, UiSnapshot};

fn default_true() -> bool {
    true
}

/// Frozen host interface state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticSnapshot {
    #[serde(default)]
    pub stash: Option<StaticStash>,
    #[serde(default)]
    pub left_panel: Option<StaticElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticStash {
    pub address: Address,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Items of the visible tab. `None` models a stash with no tab loaded.
    #[serde(default)]
    pub items: Option<Vec<ItemHandle>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticElement {
    pub address: Address,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub text: Option<String>,
    pub rect: Rect,
    #[serde(default)]
    pub entity: Option<Entity>,
    /// When false the element has an entity but cannot be read back as an item.
    #[serde(default = "default_true")]
    pub resolvable: bool,
    #[serde(default)]
    pub children: Vec<StaticElement>,
}

impl StaticElement {
    /// Visible, label-less element with no entity and no children.
    pub fn new(address: u64, rect: Rect) -> Self {
        Self {
            address: Address(address),
            visible: true,
            text: None,
            rect,
            entity: None,
            resolvable: true,
            children: Vec::new(),
        }
    }

    fn find(&self, address: Address) -> Option<&StaticElement> {
        if self.address == address {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(address))
    }
}

impl StaticSnapshot {
    pub fn from_toml_str(contents: &str) -> Result<Self, SnapshotError> {
        toml::from_str(contents).map_err(|source| SnapshotError::Parse {
            path: None,
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let contents = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| SnapshotError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    fn find(&self, address: Address) -> Option<&StaticElement> {
        self.left_panel.as_ref()?.find(address)
    }

    fn stash_at(&self, address: Address) -> Option<&StaticStash> {
        self.stash.as_ref().filter(|stash| stash.address == address)
    }
}

impl UiSnapshot for StaticSnapshot {
    fn stash_element(&self) -> Option<Address> {
        self.stash.as_ref().map(|stash| stash.address)
    }

    fn open_left_panel(&self) -> Option<Address> {
        self.left_panel.as_ref().map(|panel| panel.address)
    }

    fn is_visible(&self, element: Address) -> Option<bool> {
        if let Some(stash) = self.stash_at(element) {
            return Some(stash.visible);
        }
        self.find(element).map(|el| el.visible)
    }

    fn children(&self, element: Address) -> Option<Vec<Address>> {
        let el = self.find(element)?;
        Some(el.children.iter().map(|child| child.address).collect())
    }

    fn text(&self, element: Address) -> Option<String> {
        self.find(element)?.text.clone()
    }

    fn client_rect(&self, element: Address) -> Option<Rect> {
        self.find(element).map(|el| el.rect)
    }

    fn has_entity(&self, element: Address) -> bool {
        self.find(element).is_some_and(|el| el.entity.is_some())
    }

    fn resolve_item(&self, address: Address) -> Option<ItemHandle> {
        let el = self.find(address).filter(|el| el.resolvable)?;
        Some(ItemHandle {
            address,
            entity: el.entity.clone(),
            rect: el.rect,
        })
    }

    fn visible_stash_items(&self) -> Option<Vec<ItemHandle>> {
        self.stash.as_ref()?.items.clone()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::EntityType;

    const SNAPSHOT: &str = r#"
[stash]
address = 16
visible = false
items = []

[left_panel]
address = 256
rect = { x = 0.0, y = 0.0, width = 600.0, height = 900.0 }

[[left_panel.children]]
address = 257
text = "Relic Locker"
rect = { x = 0.0, y = 0.0, width = 600.0, height = 40.0 }

[[left_panel.children]]
address = 258
rect = { x = 0.0, y = 40.0, width = 600.0, height = 800.0 }

[[left_panel.children.children]]
address = 259
rect = { x = 10.0, y = 50.0, width = 60.0, height = 60.0 }
entity = { type = "Item", path = "Metadata/Items/Relics/Relic01" }

[[left_panel.children.children]]
address = 260
resolvable = false
rect = { x = 70.0, y = 50.0, width = 60.0, height = 60.0 }
entity = { type = "Item", path = "Metadata/Items/Relics/Relic02" }
"#;

    #[test]
    fn test_parse_snapshot() {
        let ui = StaticSnapshot::from_toml_str(SNAPSHOT).unwrap();
        assert_eq!(ui.stash_element(), Some(Address(16)));
        assert_eq!(ui.is_visible(Address(16)), Some(false));
        assert_eq!(ui.open_left_panel(), Some(Address(256)));
        assert_eq!(ui.children(Address(256)), Some(vec![Address(257), Address(258)]));
        assert_eq!(ui.children(Address(258)), Some(vec![Address(259), Address(260)]));
        assert_eq!(ui.text(Address(257)).as_deref(), Some("Relic Locker"));
        assert_eq!(ui.is_visible(Address(257)), Some(true));
        assert_eq!(ui.visible_stash_items(), Some(vec![]));
    }

    #[test]
    fn test_missing_elements_are_absent() {
        let ui = StaticSnapshot::from_toml_str(SNAPSHOT).unwrap();
        assert_eq!(ui.is_visible(Address(999)), None);
        assert_eq!(ui.children(Address(999)), None);
        assert_eq!(ui.client_rect(Address(999)), None);
        assert!(!ui.has_entity(Address(999)));
        assert!(!ui.is_shown(Address(999)));
        assert!(ui.resolve_item(Address(999)).is_none());
    }

    #[test]
    fn test_resolve_item() {
        let ui = StaticSnapshot::from_toml_str(SNAPSHOT).unwrap();
        let item = ui.resolve_item(Address(259)).unwrap();
        assert_eq!(item.rect, Rect::new(10.0, 50.0, 60.0, 60.0));
        let entity = item.entity.unwrap();
        assert_eq!(entity.kind, EntityType::Item);
        assert_eq!(entity.path, "Metadata/Items/Relics/Relic01");

        assert!(ui.has_entity(Address(260)));
        assert!(ui.resolve_item(Address(260)).is_none());
    }

    #[test]
    fn test_malformed_snapshot() {
        let err = StaticSnapshot::from_toml_str("[left_panel]\naddress = \"nope\"").unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { path: None, .. }));
    }
}
