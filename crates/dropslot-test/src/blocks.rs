//! Block-builder puzzle fixture.
//!
//! Five blockchain lifecycle stages, one item and one single-slot target
//! per stage. Matches the "5 items, 5 single-capacity targets, each with
//! a distinct category" shape used throughout the engine tests.

use dropslot_core::{Catalog, Item, Target};

use crate::placement::MapPlacement;

/// The five lifecycle stages, in order.
pub const STAGES: [&str; 5] = [
    "genesis",
    "mempool",
    "validation",
    "consensus",
    "confirmation",
];

/// Builds the block puzzle catalog.
pub fn catalog() -> Catalog {
    let items = STAGES
        .iter()
        .map(|stage| Item::new(format!("block-{stage}"), *stage))
        .collect();
    let targets = STAGES
        .iter()
        .map(|stage| Target::new(format!("slot-{stage}"), *stage))
        .collect();
    Catalog::new(items, targets).expect("block fixture catalog is valid")
}

/// An arrangement with every block on its matching slot.
pub fn solved_placement() -> MapPlacement {
    let mut placement = MapPlacement::new();
    for stage in STAGES {
        placement.put(format!("slot-{stage}"), [format!("block-{stage}")]);
    }
    placement
}
