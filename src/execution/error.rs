//! Pipeline error types

use crate::core::{InvalidTransition, Stage};
use crate::llm::CompletionError;
use thiserror::Error;

/// Errors that halt a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The completion client failed; the client error is kept unchanged
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: CompletionError,
    },

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    #[error("pipeline has already finished")]
    AlreadyFinished,

    /// A halted run is never resumed
    #[error("pipeline has already failed at the {0} stage")]
    AlreadyFailed(Stage),
}

impl PipelineError {
    /// The stage that failed, if the failure came from a stage
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineError::Stage { stage, .. } => Some(*stage),
            PipelineError::InvalidTransition(err) => Some(err.produced),
            PipelineError::AlreadyFailed(stage) => Some(*stage),
            PipelineError::AlreadyFinished => None,
        }
    }

    /// The underlying completion error, if any
    pub fn completion_error(&self) -> Option<&CompletionError> {
        match self {
            PipelineError::Stage { source, .. } => Some(source),
            _ => None,
        }
    }
}
