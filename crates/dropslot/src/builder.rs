//! Builder assembling a ready-to-run exercise session.

use std::sync::Arc;

use dropslot_core::{Catalog, DropslotError};
use dropslot_engine::{ExerciseSession, ProgressListener};
use dropslot_scoring::{BinaryJudge, ExerciseJudge};

use crate::ExerciseConfig;

/// Assembles an [`ExerciseSession`] from an authored config or from
/// hand-built parts.
///
/// The judge defaults to [`BinaryJudge`] when none is set.
pub struct SessionBuilder {
    module_id: String,
    catalog: Option<Catalog>,
    judge: Option<ExerciseJudge>,
    listeners: Vec<Arc<dyn ProgressListener>>,
}

impl SessionBuilder {
    /// Starts a builder for the given course module.
    pub fn new(module_id: impl Into<String>) -> Self {
        SessionBuilder {
            module_id: module_id.into(),
            catalog: None,
            judge: None,
            listeners: Vec::new(),
        }
    }

    /// Starts a builder pre-wired from an authored exercise: module id,
    /// catalog, and the judge matching the exercise kind.
    pub fn from_config(config: &ExerciseConfig) -> Result<Self, crate::ConfigError> {
        Ok(SessionBuilder {
            module_id: config.module_id.clone(),
            catalog: Some(config.catalog()?),
            judge: Some(config.judge()?),
            listeners: Vec::new(),
        })
    }

    /// Sets the catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the judge.
    pub fn with_judge(mut self, judge: impl Into<ExerciseJudge>) -> Self {
        self.judge = Some(judge.into());
        self
    }

    /// Registers a progress listener on the built session.
    pub fn with_listener(mut self, listener: Arc<dyn ProgressListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Builds the session.
    ///
    /// # Errors
    ///
    /// Returns [`DropslotError::Session`] when no catalog was supplied.
    pub fn build(self) -> Result<ExerciseSession<ExerciseJudge>, DropslotError> {
        let catalog = self.catalog.ok_or_else(|| {
            DropslotError::Session(format!(
                "no catalog supplied for module '{}'",
                self.module_id
            ))
        })?;
        let judge = self.judge.unwrap_or_else(|| BinaryJudge::new().into());

        let mut session = ExerciseSession::new(self.module_id, catalog, judge);
        for listener in self.listeners {
            session.add_progress_listener(listener);
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropslot_engine::CountingProgressListener;
    use dropslot_test::{blocks, team};

    #[test]
    fn test_build_requires_catalog() {
        let result = SessionBuilder::new("module-1").build();
        assert!(matches!(result, Err(DropslotError::Session(_))));
    }

    #[test]
    fn test_defaults_to_binary_judge() {
        let mut session = SessionBuilder::new("module-1")
            .with_catalog(blocks::catalog())
            .build()
            .unwrap();

        for stage in blocks::STAGES {
            session.place(&format!("block-{stage}").into(), &format!("slot-{stage}").into());
        }
        assert!(session.completion().is_complete);
        assert_eq!(session.score(), dropslot_core::PercentScore::FULL);
    }

    #[test]
    fn test_listeners_carry_into_session() {
        let listener = Arc::new(CountingProgressListener::new());
        let mut session = SessionBuilder::new("module-7")
            .with_catalog(team::catalog())
            .with_judge(team::judge())
            .with_listener(listener.clone())
            .build()
            .unwrap();

        session.place(&"m-rivera".into(), &"pos-lead".into());
        session.place(&"m-chen".into(), &"pos-analyst".into());
        session.place(&"m-okafor".into(), &"pos-analyst".into());

        assert_eq!(listener.completed_count(), 1);
        assert_eq!(
            listener.last_score(),
            dropslot_core::PercentScore::FULL
        );
    }
}
