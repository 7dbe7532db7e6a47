// Completion judge trait definition.

use dropslot_core::{Catalog, ItemId, PercentScore, TargetId};

// The judge derives completion and score from the current arrangement.
//
// Judges are pure: they never mutate state, never error, and a given
// (catalog, placement) pair always yields the same verdict. Absent or
// partial data simply yields an incomplete verdict with a lower score.

/// Read-only view of the current arrangement, as seen by a judge.
///
/// Implemented by the engine's placement store. The indirection keeps
/// judges testable headlessly, without a live session or any pointer
/// event simulation.
pub trait PlacementView {
    /// Returns the occupants of a target, in placement order.
    ///
    /// Unknown or empty targets yield an empty slice.
    fn occupants(&self, target: &TargetId) -> &[ItemId];
}

/// Per-target outcome, for mismatch indicators in a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVerdict {
    /// The target this entry describes.
    pub target_id: TargetId,
    /// True when the target holds exactly `capacity` occupants.
    pub filled: bool,
    /// True when every occupant's category equals the expected category.
    ///
    /// An empty target is vacuously matched; it is `filled` that keeps
    /// the exercise incomplete.
    pub matched: bool,
}

/// The outcome of judging one arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// True iff every target is filled and matched.
    pub is_complete: bool,
    /// The score earned by the current arrangement.
    pub score: PercentScore,
    /// Per-target breakdown, in catalog order.
    pub targets: Vec<TargetVerdict>,
}

impl Verdict {
    /// An incomplete, zero-score verdict with no target entries.
    pub fn empty() -> Self {
        Verdict {
            is_complete: false,
            score: PercentScore::ZERO,
            targets: Vec::new(),
        }
    }

    /// Looks up the entry for a target.
    pub fn target(&self, id: &TargetId) -> Option<&TargetVerdict> {
        self.targets.iter().find(|t| &t.target_id == id)
    }
}

/// A completion judge: pure derivation of "are we done" and "how well".
pub trait CompletionJudge: Send + Sync {
    /// Judges the arrangement in `placement` against `catalog`.
    fn judge(&self, catalog: &Catalog, placement: &dyn PlacementView) -> Verdict;
}

/// Surveys every target: fill state, category match, and the AND over all.
///
/// This is the completion rule shared by every judge; only the score
/// differs between them.
pub fn survey(catalog: &Catalog, placement: &dyn PlacementView) -> (bool, Vec<TargetVerdict>) {
    let mut all_ok = true;
    let mut targets = Vec::with_capacity(catalog.target_count());

    for target in catalog.targets() {
        let occupants = placement.occupants(target.id());
        let filled = occupants.len() == target.capacity();
        let matched = occupants.iter().all(|item_id| {
            catalog
                .item(item_id)
                .is_some_and(|item| item.category() == target.expected_category())
        });

        all_ok &= filled && matched;
        targets.push(TargetVerdict {
            target_id: target.id().clone(),
            filled,
            matched,
        });
    }

    (all_ok, targets)
}

/// Either of the built-in judges, selected per exercise kind.
///
/// Lets callers hold sessions for different exercise kinds behind one
/// concrete type instead of going generic.
#[derive(Debug, Clone)]
pub enum ExerciseJudge {
    /// All-or-nothing grading.
    Binary(crate::BinaryJudge),
    /// Weighted team-fit grading.
    TeamFit(crate::TeamFitJudge),
}

impl CompletionJudge for ExerciseJudge {
    fn judge(&self, catalog: &Catalog, placement: &dyn PlacementView) -> Verdict {
        match self {
            ExerciseJudge::Binary(judge) => judge.judge(catalog, placement),
            ExerciseJudge::TeamFit(judge) => judge.judge(catalog, placement),
        }
    }
}

impl From<crate::BinaryJudge> for ExerciseJudge {
    fn from(judge: crate::BinaryJudge) -> Self {
        ExerciseJudge::Binary(judge)
    }
}

impl From<crate::TeamFitJudge> for ExerciseJudge {
    fn from(judge: crate::TeamFitJudge) -> Self {
        ExerciseJudge::TeamFit(judge)
    }
}
