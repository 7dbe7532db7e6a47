//! Team assignment fixture.
//!
//! A two-position investigation team: one lead slot and a two-slot
//! analyst pool, with member profiles and position requirements for the
//! weighted team-fit judge.

use std::collections::HashMap;

use dropslot_core::{Catalog, Item, ItemId, Target, TargetId};
use dropslot_scoring::{MemberProfile, PositionRequirements, TeamFitJudge};

/// Builds the team exercise catalog. Positions are targets, members are
/// items; the category separates investigators from analysts.
pub fn catalog() -> Catalog {
    let items = vec![
        Item::new("m-rivera", "investigator").with_label("A. Rivera"),
        Item::new("m-silva", "investigator").with_label("D. Silva"),
        Item::new("m-chen", "analyst").with_label("K. Chen"),
        Item::new("m-okafor", "analyst").with_label("N. Okafor"),
    ];
    let targets = vec![
        Target::new("pos-lead", "investigator").with_label("Case lead"),
        Target::new("pos-analyst", "analyst")
            .with_capacity(2)
            .with_label("Analyst pool"),
    ];
    Catalog::new(items, targets).expect("team fixture catalog is valid")
}

/// Member profiles keyed by item id.
///
/// Rivera fits the lead perfectly; Silva has only one of the two
/// required lead skills. Chen fits the analyst pool exactly; Okafor
/// fits it through substring skill matching.
pub fn profiles() -> HashMap<ItemId, MemberProfile> {
    let mut profiles = HashMap::new();
    profiles.insert(
        ItemId::new("m-rivera"),
        MemberProfile::new()
            .with_skill("Blockchain analysis")
            .with_skill("Leadership")
            .with_certification("CFE")
            .with_clearance("Top Secret")
            .with_location("HQ"),
    );
    profiles.insert(
        ItemId::new("m-silva"),
        MemberProfile::new()
            .with_skill("Blockchain analysis")
            .with_certification("CFE")
            .with_clearance("Top Secret")
            .with_location("HQ"),
    );
    profiles.insert(
        ItemId::new("m-chen"),
        MemberProfile::new()
            .with_skill("Transaction tracing")
            .with_clearance("Secret")
            .with_location("Field"),
    );
    profiles.insert(
        ItemId::new("m-okafor"),
        MemberProfile::new()
            .with_skill("Advanced Transaction Tracing")
            .with_clearance("Secret")
            .with_location("Field"),
    );
    profiles
}

/// Position requirements keyed by target id.
pub fn requirements() -> HashMap<TargetId, PositionRequirements> {
    let mut requirements = HashMap::new();
    requirements.insert(
        TargetId::new("pos-lead"),
        PositionRequirements::new()
            .with_skill("Blockchain analysis")
            .with_skill("Leadership")
            .with_certification("CFE")
            .with_clearance("Top Secret")
            .with_location("HQ"),
    );
    requirements.insert(
        TargetId::new("pos-analyst"),
        PositionRequirements::new()
            .with_skill("Transaction tracing")
            .with_clearance("Secret")
            .with_location("Field"),
    );
    requirements
}

/// Builds the team-fit judge over [`profiles`] and [`requirements`].
pub fn judge() -> TeamFitJudge {
    TeamFitJudge::new(profiles(), requirements())
}
