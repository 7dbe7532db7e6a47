//! Evidence classification fixture.
//!
//! Six evidence items sorted into three two-slot buckets. Exercises the
//! multi-occupant target path that the block puzzle does not.

use dropslot_core::{Catalog, Item, Target};

use crate::placement::MapPlacement;

/// Builds the evidence exercise catalog.
pub fn catalog() -> Catalog {
    let items = vec![
        Item::new("ev-wallet-addr", "on-chain").with_label("Wallet address 0x4f..c2"),
        Item::new("ev-tx-hash", "on-chain").with_label("Transaction hash"),
        Item::new("ev-kyc-record", "records").with_label("Exchange KYC record"),
        Item::new("ev-bank-stmt", "records").with_label("Bank statement"),
        Item::new("ev-hw-wallet", "physical").with_label("Seized hardware wallet"),
        Item::new("ev-burner", "physical").with_label("Burner phone"),
    ];
    let targets = vec![
        Target::new("bucket-onchain", "on-chain")
            .with_capacity(2)
            .with_label("On-chain evidence"),
        Target::new("bucket-records", "records")
            .with_capacity(2)
            .with_label("Financial records"),
        Target::new("bucket-physical", "physical")
            .with_capacity(2)
            .with_label("Physical evidence"),
    ];
    Catalog::new(items, targets).expect("evidence fixture catalog is valid")
}

/// An arrangement with every item in its matching bucket.
pub fn solved_placement() -> MapPlacement {
    let mut placement = MapPlacement::new();
    placement.put("bucket-onchain", ["ev-wallet-addr", "ev-tx-hash"]);
    placement.put("bucket-records", ["ev-kyc-record", "ev-bank-stmt"]);
    placement.put("bucket-physical", ["ev-hw-wallet", "ev-burner"]);
    placement
}
