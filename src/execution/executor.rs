//! Stage executor - runs one stage against the completion client

use crate::{
    core::{split_lines, PipelineState, PromptTemplates, Stage, StageOutput},
    execution::PipelineError,
    llm::{CompletionClient, Prompt, TokenUsage},
};
use tracing::debug;

/// Result of executing a stage
#[derive(Debug, Clone, PartialEq)]
pub struct StageResult {
    /// Post-processed output ready to record in the state
    pub output: StageOutput,

    /// Token usage reported by the provider
    pub usage: Option<TokenUsage>,
}

/// Executes a single stage
pub struct StageExecutor<C> {
    client: C,
    templates: PromptTemplates,
}

impl<C: CompletionClient> StageExecutor<C> {
    pub fn new(client: C, templates: PromptTemplates) -> Self {
        Self { client, templates }
    }

    pub fn templates(&self) -> &PromptTemplates {
        &self.templates
    }

    /// Build the prompt for the state's current stage
    ///
    /// Returns `None` once the pipeline is done. Each stage reads only the
    /// output of the stage before it.
    pub fn build_prompt(&self, state: &PipelineState) -> Option<Prompt> {
        match state.stage() {
            Stage::Outline => Some(self.templates.outline_prompt(state.topic())),
            Stage::Refine => Some(
                self.templates
                    .refine_prompt(state.outline().unwrap_or_default()),
            ),
            Stage::Write => Some(
                self.templates
                    .write_prompt(state.refined_outline().unwrap_or_default()),
            ),
            Stage::Done => None,
        }
    }

    /// Execute the state's current stage and return its output
    ///
    /// The state itself is not modified.
    pub async fn execute(&self, state: &PipelineState) -> Result<StageResult, PipelineError> {
        let stage = state.stage();
        let prompt = self
            .build_prompt(state)
            .ok_or(PipelineError::AlreadyFinished)?;

        debug!("Executing stage: {}", stage);
        debug!("Prompt for stage {}: {:?}", stage, prompt);

        let completion = match self.client.complete(&prompt).await {
            Ok(completion) => completion,
            Err(source) => {
                debug!("Completion error for stage {}: {}", stage, source);
                return Err(PipelineError::Stage { stage, source });
            }
        };

        debug!("Response for stage {}: {}", stage, completion.content);

        let output = match stage {
            Stage::Outline => StageOutput::Outline(split_lines(&completion.content)),
            Stage::Refine => StageOutput::RefinedOutline(split_lines(&completion.content)),
            Stage::Write => StageOutput::BlogContent(completion.content),
            Stage::Done => return Err(PipelineError::AlreadyFinished),
        };

        Ok(StageResult {
            output,
            usage: completion.usage,
        })
    }
}
