//! Exercise session: one live run of a placement exercise.
//!
//! The session owns the catalog, the placement store, the drag state,
//! and the judge, and re-derives the completion verdict after every
//! placement change. Completion state is never stored independently of
//! the arrangement; the cached verdict is just the latest derivation.

use std::sync::Arc;

use dropslot_core::{Catalog, Item, ItemId, PercentScore, TargetId};
use dropslot_scoring::{CompletionJudge, Verdict};

use crate::drag::DragSession;
use crate::event::{ProgressEventSupport, ProgressListener};
use crate::placement::PlacementStore;

/// A running exercise.
///
/// All ids passed in are expected to come from the session's catalog
/// (closed-world assumption). Unknown ids trip a debug assertion and are
/// ignored in release builds; there is no user-visible error path.
///
/// # Example
///
/// ```
/// use dropslot_core::{Catalog, Item, Target};
/// use dropslot_engine::ExerciseSession;
/// use dropslot_scoring::BinaryJudge;
///
/// let catalog = Catalog::new(
///     vec![Item::new("tx", "transaction")],
///     vec![Target::new("bucket", "transaction")],
/// )
/// .unwrap();
///
/// let mut session = ExerciseSession::new("module-1", catalog, BinaryJudge::new());
/// session.begin_drag(&"tx".into());
/// session.drop(Some(&"bucket".into()));
/// assert!(session.completion().is_complete);
/// ```
pub struct ExerciseSession<J> {
    module_id: String,
    catalog: Catalog,
    placement: PlacementStore,
    drag: DragSession,
    judge: J,
    events: ProgressEventSupport,
    completion_reported: bool,
    verdict: Verdict,
}

impl<J: CompletionJudge> ExerciseSession<J> {
    /// Creates a session over a catalog with the given judge.
    ///
    /// The initial verdict is derived immediately. Progress listeners
    /// only hear about completions caused by operations on the session,
    /// so a degenerate catalog that is complete while empty fires
    /// nothing.
    pub fn new(module_id: impl Into<String>, catalog: Catalog, judge: J) -> Self {
        let placement = PlacementStore::new();
        let verdict = judge.judge(&catalog, &placement);
        let completion_reported = verdict.is_complete;

        ExerciseSession {
            module_id: module_id.into(),
            catalog,
            placement,
            drag: DragSession::new(),
            judge,
            events: ProgressEventSupport::new(),
            completion_reported,
            verdict,
        }
    }

    /// Registers a progress listener.
    pub fn add_progress_listener(&mut self, listener: Arc<dyn ProgressListener>) {
        self.events.add_listener(listener);
    }

    // === Drag capability surface ===

    /// Starts dragging an item. Replaces any drag already in flight.
    pub fn begin_drag(&mut self, item: &ItemId) {
        debug_assert!(
            self.catalog.contains_item(item),
            "item '{item}' is not in the catalog"
        );
        if !self.catalog.contains_item(item) {
            return;
        }
        self.drag.begin(item.clone());
    }

    /// Updates the hovered target for highlighting. Has no effect on the
    /// arrangement.
    pub fn hover(&mut self, target: Option<&TargetId>) {
        self.drag.hover(target.cloned());
    }

    /// Ends the in-flight drag. A drop over a target places the dragged
    /// item there; a drop elsewhere leaves the arrangement unchanged.
    /// Returns true if the arrangement changed.
    pub fn drop(&mut self, target: Option<&TargetId>) -> bool {
        match self.drag.end(target.cloned()) {
            Some((item, target)) => self.place(&item, &target),
            None => false,
        }
    }

    // === Direct placement (non-pointer drivers and tests) ===

    /// Places an item on a target, moving it from wherever it was.
    /// Returns true if the arrangement changed.
    pub fn place(&mut self, item: &ItemId, target: &TargetId) -> bool {
        debug_assert!(
            self.catalog.contains_item(item),
            "item '{item}' is not in the catalog"
        );
        debug_assert!(
            self.catalog.contains_target(target),
            "target '{target}' is not in the catalog"
        );
        let Some(target) = self.catalog.target(target) else {
            return false;
        };
        if !self.catalog.contains_item(item) {
            return false;
        }

        let target = target.clone();
        let placed = self.placement.place(item.clone(), &target);
        if placed {
            tracing::debug!(item = %item, slot = %target.id(), "placed item");
            self.refresh();
        } else {
            tracing::debug!(item = %item, slot = %target.id(), "target full, placement ignored");
        }
        placed
    }

    /// Returns an item to the unplaced pool. Returns true if it was
    /// placed.
    pub fn unplace(&mut self, item: &ItemId) -> bool {
        debug_assert!(
            self.catalog.contains_item(item),
            "item '{item}' is not in the catalog"
        );
        let removed = self.placement.unplace(item);
        if removed {
            tracing::debug!(item = %item, "unplaced item");
            self.refresh();
        }
        removed
    }

    /// Discards all placements and any in-flight drag.
    ///
    /// Does not re-arm the completion event: the progress callback fires
    /// at most once per session.
    pub fn reset(&mut self) {
        self.placement.reset();
        self.drag.clear();
        self.verdict = self.judge.judge(&self.catalog, &self.placement);
        tracing::debug!(module_id = %self.module_id, "session reset");
    }

    // === Snapshots ===

    /// The latest completion verdict.
    pub fn completion(&self) -> &Verdict {
        &self.verdict
    }

    /// The current score.
    pub fn score(&self) -> PercentScore {
        self.verdict.score
    }

    /// The current arrangement.
    pub fn placements(&self) -> &PlacementStore {
        &self.placement
    }

    /// The transient drag state.
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Items not currently placed on any target, in catalog order.
    pub fn unplaced_items(&self) -> Vec<&Item> {
        self.placement.unplaced(&self.catalog)
    }

    /// The catalog this session runs over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The course module this session belongs to.
    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    // Re-derives the verdict and fires the completion event on the
    // first transition into a complete arrangement.
    fn refresh(&mut self) {
        self.verdict = self.judge.judge(&self.catalog, &self.placement);
        if self.verdict.is_complete && !self.completion_reported {
            self.completion_reported = true;
            tracing::debug!(
                module_id = %self.module_id,
                score = %self.verdict.score,
                "exercise complete"
            );
            self.events
                .fire_exercise_completed(&self.module_id, self.verdict.score);
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
