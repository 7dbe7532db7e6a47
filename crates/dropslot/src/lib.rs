//! Dropslot - A headless placement engine for drag-and-drop exercises
//!
//! Wire an authored exercise into a running session in a few lines:
//!
//! ```rust
//! use dropslot::prelude::*;
//!
//! let config = ExerciseConfig::from_toml_str(r#"
//!     module_id = "module-1"
//!
//!     [[items]]
//!     id = "tx"
//!     category = "transaction"
//!
//!     [[targets]]
//!     id = "bucket"
//!     category = "transaction"
//! "#).unwrap();
//!
//! let mut session = SessionBuilder::from_config(&config).unwrap().build().unwrap();
//! session.place(&"tx".into(), &"bucket".into());
//! assert!(session.completion().is_complete);
//! ```

// Domain types
pub use dropslot_core::{
    Catalog, Category, DropslotError, Item, ItemId, PercentScore, Target, TargetId,
};

// Judges
pub use dropslot_scoring::{
    BinaryJudge, CompletionJudge, ExerciseJudge, FitWeights, MemberProfile, PlacementView,
    PositionRequirements, TargetVerdict, TeamFitJudge, Verdict,
};

// Engine
pub use dropslot_engine::{
    CountingProgressListener, DragSession, ExerciseSession, LoggingProgressListener,
    PlacementStore, ProgressListener,
};

// Exercise configuration
pub use dropslot_config::{ConfigError, ExerciseConfig, ExerciseKind};

mod builder;

pub use builder::SessionBuilder;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        BinaryJudge, Catalog, CompletionJudge, ExerciseConfig, ExerciseJudge, ExerciseSession,
        Item, ItemId, PercentScore, ProgressListener, SessionBuilder, Target, TargetId,
        TeamFitJudge, Verdict,
    };
}
