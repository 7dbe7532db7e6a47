//! Tests for the exercise session.

use std::sync::Arc;

use dropslot_core::PercentScore;
use dropslot_scoring::BinaryJudge;
use dropslot_test::{blocks, team};

use crate::event::CountingProgressListener;
use crate::session::ExerciseSession;

fn block_session() -> (ExerciseSession<BinaryJudge>, Arc<CountingProgressListener>) {
    let mut session = ExerciseSession::new("module-blocks", blocks::catalog(), BinaryJudge::new());
    let listener = Arc::new(CountingProgressListener::new());
    session.add_progress_listener(listener.clone());
    (session, listener)
}

fn solve_blocks(session: &mut ExerciseSession<BinaryJudge>) {
    for stage in blocks::STAGES {
        session.begin_drag(&format!("block-{stage}").into());
        session.drop(Some(&format!("slot-{stage}").into()));
    }
}

#[test]
fn test_solving_all_slots_completes_with_full_score() {
    let (mut session, listener) = block_session();

    solve_blocks(&mut session);

    let verdict = session.completion();
    assert!(verdict.is_complete);
    assert_eq!(verdict.score, PercentScore::FULL);
    assert_eq!(listener.completed_count(), 1);
    assert_eq!(listener.last_score(), PercentScore::FULL);
    assert!(session.unplaced_items().is_empty());
}

#[test]
fn test_one_wrong_slot_blocks_completion() {
    let (mut session, listener) = block_session();

    // Three correct placements, then genesis and consensus swapped.
    for stage in ["mempool", "validation", "confirmation"] {
        session.place(&format!("block-{stage}").into(), &format!("slot-{stage}").into());
    }
    session.place(&"block-consensus".into(), &"slot-genesis".into());
    session.place(&"block-genesis".into(), &"slot-consensus".into());

    let verdict = session.completion();
    assert!(!verdict.is_complete);
    assert_eq!(verdict.score, PercentScore::ZERO);
    assert_eq!(listener.completed_count(), 0);

    // The wrong slot reports a mismatch; the correct ones do not.
    assert!(!verdict.target(&"slot-genesis".into()).unwrap().matched);
    assert!(verdict.target(&"slot-mempool".into()).unwrap().matched);
}

#[test]
fn test_dragging_between_targets_moves_atomically() {
    let (mut session, _) = block_session();

    session.begin_drag(&"block-genesis".into());
    session.drop(Some(&"slot-genesis".into()));
    session.begin_drag(&"block-genesis".into());
    session.drop(Some(&"slot-mempool".into()));

    let placements = session.placements();
    assert!(placements.occupants(&"slot-genesis".into()).is_empty());
    assert_eq!(
        placements.occupants(&"slot-mempool".into()),
        &[dropslot_core::ItemId::new("block-genesis")]
    );
    assert_eq!(placements.placed_count(), 1);
}

#[test]
fn test_cancelled_drop_changes_nothing() {
    let (mut session, _) = block_session();

    session.place(&"block-genesis".into(), &"slot-genesis".into());
    session.begin_drag(&"block-genesis".into());
    session.hover(Some(&"slot-mempool".into()));
    assert!(!session.drop(None));

    assert!(!session.drag().is_dragging());
    assert_eq!(
        session.placements().target_of(&"block-genesis".into()),
        Some(&"slot-genesis".into())
    );
}

#[test]
fn test_reset_discards_placements() {
    let (mut session, _) = block_session();

    session.place(&"block-genesis".into(), &"slot-genesis".into());
    session.begin_drag(&"block-mempool".into());
    session.reset();

    assert!(session.placements().is_empty());
    assert!(!session.drag().is_dragging());
    assert!(!session.completion().is_complete);
    assert_eq!(session.score(), PercentScore::ZERO);
    assert_eq!(session.unplaced_items().len(), 5);
}

#[test]
fn test_completion_fires_at_most_once() {
    let (mut session, listener) = block_session();

    solve_blocks(&mut session);
    assert_eq!(listener.completed_count(), 1);

    // Breaking and re-solving does not re-fire.
    session.unplace(&"block-genesis".into());
    assert!(!session.completion().is_complete);
    session.place(&"block-genesis".into(), &"slot-genesis".into());
    assert!(session.completion().is_complete);
    assert_eq!(listener.completed_count(), 1);
}

#[test]
fn test_reset_does_not_rearm_completion_event() {
    let (mut session, listener) = block_session();

    solve_blocks(&mut session);
    session.reset();
    solve_blocks(&mut session);

    assert!(session.completion().is_complete);
    assert_eq!(listener.completed_count(), 1);
}

#[test]
fn test_unplace_returns_item_to_pool() {
    let (mut session, _) = block_session();

    session.place(&"block-genesis".into(), &"slot-genesis".into());
    assert!(session.unplace(&"block-genesis".into()));
    assert!(!session.unplace(&"block-genesis".into()));

    let pool: Vec<&str> = session
        .unplaced_items()
        .iter()
        .map(|item| item.id().as_str())
        .collect();
    assert_eq!(pool.len(), 5);
    assert!(pool.contains(&"block-genesis"));
}

#[test]
fn test_team_session_reports_weighted_score() {
    let mut session = ExerciseSession::new("module-team", team::catalog(), team::judge());
    let listener = Arc::new(CountingProgressListener::new());
    session.add_progress_listener(listener.clone());

    // Silva carries only one of the lead's two required skills.
    session.place(&"m-silva".into(), &"pos-lead".into());
    session.place(&"m-chen".into(), &"pos-analyst".into());
    session.place(&"m-okafor".into(), &"pos-analyst".into());

    let verdict = session.completion();
    assert!(verdict.is_complete);
    assert_eq!(verdict.score, PercentScore::of(90));
    assert_eq!(listener.completed_count(), 1);
    assert_eq!(listener.last_score(), PercentScore::of(90));

    // Swapping in the perfect lead raises the score but fires nothing.
    session.unplace(&"m-silva".into());
    session.place(&"m-rivera".into(), &"pos-lead".into());
    assert_eq!(session.score(), PercentScore::FULL);
    assert_eq!(listener.completed_count(), 1);
}

#[test]
fn test_overfilling_a_position_is_ignored() {
    let mut session = ExerciseSession::new("module-team", team::catalog(), team::judge());

    session.place(&"m-chen".into(), &"pos-analyst".into());
    session.place(&"m-okafor".into(), &"pos-analyst".into());
    assert!(!session.place(&"m-rivera".into(), &"pos-analyst".into()));

    assert_eq!(session.placements().occupants(&"pos-analyst".into()).len(), 2);
    assert!(!session.placements().is_placed(&"m-rivera".into()));
}
