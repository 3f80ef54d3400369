//! Relic classification and per-item eligibility.

use std::fmt;
use std::sync::Arc;

use crate::host::{EntityType, ItemHandle};

/// Substring of an entity path that marks it as a relic.
///
/// Matching is a plain case-sensitive `contains`, so `RelicFragment` and
/// `NonRelicThing` both qualify.
pub const RELIC_PATH_MARKER: &str = "Relic";

/// True if the item is backed by an `Item` entity whose path mentions a relic.
pub fn is_relic(item: &ItemHandle) -> bool {
    item.entity.as_ref().is_some_and(|entity| {
        entity.kind == EntityType::Item && entity.path.contains(RELIC_PATH_MARKER)
    })
}

/// Extra per-item rule applied after [`is_relic`].
///
/// Defaults to accepting everything. Hook point for rules such as rarity or
/// already-claimed state.
#[derive(Clone)]
pub struct Eligibility(Arc<dyn Fn(&ItemHandle) -> bool + Send + Sync>);

impl Eligibility {
    pub fn new(predicate: impl Fn(&ItemHandle) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    pub fn accept_all() -> Self {
        Self::new(|_| true)
    }

    pub fn allows(&self, item: &ItemHandle) -> bool {
        (self.0)(item)
    }
}

impl Default for Eligibility {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl fmt::Debug for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Eligibility(..)")
    }
}
