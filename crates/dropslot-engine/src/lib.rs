//! Dropslot Engine - The mutable side of a placement exercise
//!
//! Everything here is session-local and single-threaded by design: the
//! host UI event loop delivers one interaction at a time, each operation
//! runs to completion within one event-handler invocation, and nothing
//! blocks or awaits. No entity survives a session.
//!
//! - [`PlacementStore`] - which item occupies which target
//! - [`DragSession`] - the in-flight pointer drag, if any
//! - [`ExerciseSession`] - ties store, drag state, judge, and progress
//!   events together

pub mod drag;
pub mod event;
pub mod placement;
pub mod session;

pub use drag::DragSession;
pub use event::{
    CountingProgressListener, LoggingProgressListener, ProgressEventSupport, ProgressListener,
};
pub use placement::PlacementStore;
pub use session::ExerciseSession;
