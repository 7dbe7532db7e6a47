//! Dropslot Scoring - Completion judges for placement exercises
//!
//! A judge is a pure function over (catalog, placement view) producing a
//! [`Verdict`]: is the exercise complete, what score does the current
//! arrangement earn, and which targets are filled or mismatched.
//!
//! Two judges exist, preserved per-exercise rather than unified:
//! - [`BinaryJudge`] - all-or-nothing grading for the simple puzzles
//! - [`TeamFitJudge`] - weighted multi-factor grading for team assignment

pub mod binary;
pub mod judge;
pub mod team_fit;

pub use binary::BinaryJudge;
pub use judge::{CompletionJudge, ExerciseJudge, PlacementView, TargetVerdict, Verdict};
pub use team_fit::{FitWeights, MemberProfile, PositionRequirements, TeamFitJudge};
