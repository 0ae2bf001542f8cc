//! Main execution engine - runs the outline → refine → write sequence

use crate::{
    core::{ExecutionStatus, PipelineState, PromptTemplates, Stage},
    execution::{PipelineError, StageExecutor},
    llm::{CompletionClient, TokenUsage},
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Events that can occur during pipeline execution
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    PipelineStarted {
        execution_id: Uuid,
        topic: String,
    },
    StageStarted {
        stage: Stage,
    },
    StageCompleted {
        stage: Stage,
        items: usize,
        usage: Option<TokenUsage>,
    },
    StageFailed {
        stage: Stage,
        error: String,
    },
    PipelineCompleted {
        execution_id: Uuid,
        status: ExecutionStatus,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(&ExecutionEvent) + Send + Sync>;

/// Blog pipeline: one injected client shared by every stage
///
/// Stages run strictly in order. The first failure halts the run; outputs
/// recorded before the failure stay in the state and later fields stay
/// empty.
pub struct BlogPipeline<C> {
    executor: StageExecutor<C>,
    event_handlers: Vec<EventHandler>,
}

impl<C: CompletionClient> BlogPipeline<C> {
    /// Create a pipeline with the default prompt templates
    pub fn new(client: C) -> Self {
        Self::with_templates(client, PromptTemplates::default())
    }

    pub fn with_templates(client: C, templates: PromptTemplates) -> Self {
        Self {
            executor: StageExecutor::new(client, templates),
            event_handlers: Vec::new(),
        }
    }

    /// Add an event handler
    pub fn with_event_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ExecutionEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Arc::new(handler));
        self
    }

    pub fn templates(&self) -> &PromptTemplates {
        self.executor.templates()
    }

    /// Emit an event to all handlers
    fn emit_event(&self, event: ExecutionEvent) {
        for handler in &self.event_handlers {
            handler(&event);
        }
    }

    /// Run all stages for `topic` on a fresh state
    ///
    /// Returns the finished state; on failure only the error is returned.
    pub async fn generate(&self, topic: impl Into<String>) -> Result<PipelineState, PipelineError> {
        let mut state = PipelineState::new(topic);
        self.run(&mut state).await?;
        Ok(state)
    }

    /// Run the remaining stages of `state`
    pub async fn run(&self, state: &mut PipelineState) -> Result<(), PipelineError> {
        if state.status() == ExecutionStatus::Failed {
            return Err(PipelineError::AlreadyFailed(state.stage()));
        }
        if state.stage().is_terminal() {
            return Err(PipelineError::AlreadyFinished);
        }

        let execution_id = state.execution_id;
        debug!("Starting blog pipeline for topic: {} ({})", state.topic(), execution_id);
        self.emit_event(ExecutionEvent::PipelineStarted {
            execution_id,
            topic: state.topic().to_string(),
        });

        state.start();

        while !state.stage().is_terminal() {
            let stage = state.stage();
            if let Err(e) = self.run_stage(state).await {
                debug!("Pipeline halted at stage {}: {}", stage, e);
                self.emit_event(ExecutionEvent::StageFailed {
                    stage,
                    error: e.to_string(),
                });
                state.fail();
                self.emit_event(ExecutionEvent::PipelineCompleted {
                    execution_id,
                    status: ExecutionStatus::Failed,
                });
                return Err(e);
            }
        }

        state.complete();
        debug!("Blog pipeline finished: {}", execution_id);
        self.emit_event(ExecutionEvent::PipelineCompleted {
            execution_id,
            status: ExecutionStatus::Completed,
        });

        Ok(())
    }

    /// Execute the current stage and record its output
    async fn run_stage(&self, state: &mut PipelineState) -> Result<(), PipelineError> {
        let stage = state.stage();
        self.emit_event(ExecutionEvent::StageStarted { stage });

        let result = self.executor.execute(state).await?;
        let items = result.output.item_count();
        state.record(result.output)?;

        debug!("Stage {} completed ({} items)", stage, items);
        self.emit_event(ExecutionEvent::StageCompleted {
            stage,
            items,
            usage: result.usage,
        });

        Ok(())
    }
}
