//! Placement store: the current item-to-target assignment.
//!
//! Single source of truth for the arrangement. Two maps are kept in
//! lockstep: target to occupant list (ordered) and the inverse item to
//! target map, so moves and lookups stay O(1) in the number of targets.
//!
//! Invariants, upheld by every operation:
//! - an item occupies at most one target at any time
//! - a target never holds more occupants than its capacity
//!
//! The unplaced pool is never stored; it is derived as catalog items
//! minus placed items.

use std::collections::HashMap;

use smallvec::SmallVec;

use dropslot_core::{Catalog, Item, ItemId, Target, TargetId};
use dropslot_scoring::PlacementView;

/// Occupants of one target, in placement order. Almost always one.
pub type Occupants = SmallVec<[ItemId; 2]>;

/// In-memory mapping from target to occupant items.
#[derive(Debug, Clone, Default)]
pub struct PlacementStore {
    by_target: HashMap<TargetId, Occupants>,
    by_item: HashMap<ItemId, TargetId>,
}

impl PlacementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places an item on a target.
    ///
    /// If the target is already at capacity (and does not already hold
    /// the item), the call is ignored and the prior arrangement is
    /// preserved; returns false. Otherwise the item is removed from
    /// whichever target currently holds it and appended to this one,
    /// atomically within the call; returns true.
    pub fn place(&mut self, item: ItemId, target: &Target) -> bool {
        let occupants = self.by_target.entry(target.id().clone()).or_default();
        let already_here = occupants.contains(&item);
        if occupants.len() >= target.capacity() && !already_here {
            return false;
        }

        self.detach(&item);
        self.by_target
            .entry(target.id().clone())
            .or_default()
            .push(item.clone());
        self.by_item.insert(item, target.id().clone());
        true
    }

    /// Removes an item from whatever target holds it, returning it to
    /// the implicit unplaced pool. Returns false if it was not placed.
    pub fn unplace(&mut self, item: &ItemId) -> bool {
        if self.detach(item) {
            self.by_item.remove(item);
            true
        } else {
            false
        }
    }

    /// Clears all placements.
    pub fn reset(&mut self) {
        self.by_target.clear();
        self.by_item.clear();
    }

    /// Returns the occupants of a target, in placement order.
    pub fn occupants(&self, target: &TargetId) -> &[ItemId] {
        self.by_target.get(target).map_or(&[], SmallVec::as_slice)
    }

    /// Returns the target currently holding an item, if any.
    pub fn target_of(&self, item: &ItemId) -> Option<&TargetId> {
        self.by_item.get(item)
    }

    /// Returns true if the item currently occupies some target.
    pub fn is_placed(&self, item: &ItemId) -> bool {
        self.by_item.contains_key(item)
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.by_item.len()
    }

    /// Returns true if nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.by_item.is_empty()
    }

    /// Derives the unplaced pool: catalog items minus placed items, in
    /// authored order.
    pub fn unplaced<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Item> {
        catalog
            .items()
            .filter(|item| !self.is_placed(item.id()))
            .collect()
    }

    // Removes the item from its current occupant list without touching
    // the inverse map.
    fn detach(&mut self, item: &ItemId) -> bool {
        let Some(current) = self.by_item.get(item) else {
            return false;
        };
        if let Some(occupants) = self.by_target.get_mut(current) {
            occupants.retain(|id| id != item);
        }
        true
    }
}

impl PlacementView for PlacementStore {
    fn occupants(&self, target: &TargetId) -> &[ItemId] {
        PlacementStore::occupants(self, target)
    }
}
