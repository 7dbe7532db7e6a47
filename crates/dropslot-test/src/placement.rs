//! Map-backed placement view for judge tests.
//!
//! Lets tests author an arrangement directly, without driving a live
//! session. Nothing here enforces capacity or uniqueness; invariant
//! enforcement is the engine's job and is tested there.

use std::collections::HashMap;

use dropslot_core::{ItemId, TargetId};
use dropslot_scoring::PlacementView;

/// A hand-authored arrangement.
#[derive(Debug, Clone, Default)]
pub struct MapPlacement {
    occupants: HashMap<TargetId, Vec<ItemId>>,
}

impl MapPlacement {
    /// Creates an empty arrangement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the occupants of a target, replacing any previous entry.
    pub fn put<I, T>(&mut self, target: impl Into<TargetId>, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemId>,
    {
        self.occupants.insert(
            target.into(),
            items.into_iter().map(Into::into).collect(),
        );
    }
}

impl PlacementView for MapPlacement {
    fn occupants(&self, target: &TargetId) -> &[ItemId] {
        self.occupants.get(target).map_or(&[], Vec::as_slice)
    }
}
