//! All-or-nothing judge for the simple placement puzzles.

use dropslot_core::{Catalog, PercentScore};

use crate::judge::{survey, CompletionJudge, PlacementView, Verdict};

/// Grades a flat 100 on completion and 0 otherwise.
///
/// No partial credit: the block puzzle and the evidence classifier both
/// grade this way, even where the presentation suggests granularity.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryJudge;

impl BinaryJudge {
    /// Creates the judge.
    pub fn new() -> Self {
        BinaryJudge
    }
}

impl CompletionJudge for BinaryJudge {
    fn judge(&self, catalog: &Catalog, placement: &dyn PlacementView) -> Verdict {
        let (is_complete, targets) = survey(catalog, placement);
        let score = if is_complete {
            PercentScore::FULL
        } else {
            PercentScore::ZERO
        };

        Verdict {
            is_complete,
            score,
            targets,
        }
    }
}
