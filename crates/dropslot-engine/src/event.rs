//! Progress events for exercise completion.
//!
//! A progress collaborator (in the original course, the module progress
//! tracker) registers a listener on the session and is notified exactly
//! once, at the first transition into a complete arrangement. Listeners
//! are explicit objects passed into the session, never ambient statics.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;

use dropslot_core::PercentScore;

/// Listener for exercise completion.
pub trait ProgressListener: Send + Sync + Debug {
    /// Called once per session, when the arrangement first becomes
    /// complete.
    ///
    /// # Arguments
    ///
    /// * `module_id` - The course module the session belongs to
    /// * `score` - The score earned at the moment of completion
    fn on_exercise_completed(&self, module_id: &str, score: PercentScore);
}

/// Broadcaster for progress events.
///
/// All listener methods are called synchronously in registration order.
/// The at-most-once guarantee lives in the session, not here.
#[derive(Clone, Default)]
pub struct ProgressEventSupport {
    listeners: Vec<Arc<dyn ProgressListener>>,
}

impl ProgressEventSupport {
    /// Creates an empty broadcaster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener.
    pub fn add_listener(&mut self, listener: Arc<dyn ProgressListener>) {
        self.listeners.push(listener);
    }

    /// Removes all listeners.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Fires the completion event.
    pub fn fire_exercise_completed(&self, module_id: &str, score: PercentScore) {
        for listener in &self.listeners {
            listener.on_exercise_completed(module_id, score);
        }
    }
}

impl Debug for ProgressEventSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressEventSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A listener that logs completions through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LoggingProgressListener;

impl LoggingProgressListener {
    /// Creates a new logging listener.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressListener for LoggingProgressListener {
    fn on_exercise_completed(&self, module_id: &str, score: PercentScore) {
        tracing::info!(module_id, %score, "exercise completed");
    }
}

/// A listener that counts completions and remembers the last score.
///
/// Useful for testing the at-most-once guarantee.
#[derive(Debug, Default)]
pub struct CountingProgressListener {
    completed_count: AtomicUsize,
    last_score: AtomicU8,
}

impl CountingProgressListener {
    /// Creates a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of completion events received.
    pub fn completed_count(&self) -> usize {
        self.completed_count.load(Ordering::SeqCst)
    }

    /// Returns the score carried by the most recent event.
    pub fn last_score(&self) -> PercentScore {
        PercentScore::of(self.last_score.load(Ordering::SeqCst))
    }
}

impl ProgressListener for CountingProgressListener {
    fn on_exercise_completed(&self, _module_id: &str, score: PercentScore) {
        self.completed_count.fetch_add(1, Ordering::SeqCst);
        self.last_score.store(score.value(), Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listeners_fire_in_registration_order() {
        let first = Arc::new(CountingProgressListener::new());
        let second = Arc::new(CountingProgressListener::new());

        let mut support = ProgressEventSupport::new();
        support.add_listener(first.clone());
        support.add_listener(second.clone());
        assert_eq!(support.listener_count(), 2);

        support.fire_exercise_completed("module-3", PercentScore::FULL);
        assert_eq!(first.completed_count(), 1);
        assert_eq!(second.completed_count(), 1);
        assert_eq!(first.last_score(), PercentScore::FULL);
    }

    #[test]
    fn test_clear_listeners() {
        let listener = Arc::new(CountingProgressListener::new());
        let mut support = ProgressEventSupport::new();
        support.add_listener(listener.clone());
        support.clear_listeners();

        support.fire_exercise_completed("module-3", PercentScore::FULL);
        assert_eq!(listener.completed_count(), 0);
    }
}
