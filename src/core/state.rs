//! Pipeline state threaded through the stages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Position of a pipeline run in the fixed outline → refine → write sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Draft an outline from the topic
    Outline,
    /// Revise the outline against the rubric
    Refine,
    /// Expand the refined outline into prose
    Write,
    /// All stages finished
    Done,
}

impl Stage {
    /// The unconditional successor of this stage
    pub fn next(self) -> Stage {
        match self {
            Stage::Outline => Stage::Refine,
            Stage::Refine => Stage::Write,
            Stage::Write | Stage::Done => Stage::Done,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Stage::Done
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Outline => "outline",
            Stage::Refine => "refine",
            Stage::Write => "write",
            Stage::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall pipeline execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// Pipeline has not started
    Pending,
    /// Pipeline is currently running
    Running,
    /// Pipeline completed successfully
    Completed,
    /// Pipeline failed
    Failed,
}

/// Output produced by one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutput {
    Outline(Vec<String>),
    RefinedOutline(Vec<String>),
    BlogContent(String),
}

impl StageOutput {
    /// The stage that produces this kind of output
    pub fn stage(&self) -> Stage {
        match self {
            StageOutput::Outline(_) => Stage::Outline,
            StageOutput::RefinedOutline(_) => Stage::Refine,
            StageOutput::BlogContent(_) => Stage::Write,
        }
    }

    /// Number of outline points, or 1 for prose
    pub fn item_count(&self) -> usize {
        match self {
            StageOutput::Outline(items) | StageOutput::RefinedOutline(items) => items.len(),
            StageOutput::BlogContent(_) => 1,
        }
    }
}

/// A stage output arrived out of order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot record {produced} output while the pipeline is at the {current} stage")]
pub struct InvalidTransition {
    pub current: Stage,
    pub produced: Stage,
}

/// State of a single pipeline run
///
/// Created with only the topic set. Each stage output can be recorded exactly
/// once and only in pipeline order, so a field never changes after it is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineState {
    /// Unique execution ID
    pub execution_id: Uuid,

    topic: String,
    outline: Option<Vec<String>>,
    refined_outline: Option<Vec<String>>,
    blog_content: Option<String>,

    stage: Stage,
    status: ExecutionStatus,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl PipelineState {
    /// Create a fresh state for a topic
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            topic: topic.into(),
            outline: None,
            refined_outline: None,
            blog_content: None,
            stage: Stage::Outline,
            status: ExecutionStatus::Pending,
            started_at: None,
            completed_at: None,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn outline(&self) -> Option<&[String]> {
        self.outline.as_deref()
    }

    pub fn refined_outline(&self) -> Option<&[String]> {
        self.refined_outline.as_deref()
    }

    pub fn blog_content(&self) -> Option<&str> {
        self.blog_content.as_deref()
    }

    /// Consume the state, keeping only the finished post
    pub fn into_blog_content(self) -> Option<String> {
        self.blog_content
    }

    /// The next stage to run
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn status(&self) -> ExecutionStatus {
        self.status
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Record the output of the current stage and advance to the next one
    pub fn record(&mut self, output: StageOutput) -> Result<(), InvalidTransition> {
        if output.stage() != self.stage {
            return Err(InvalidTransition {
                current: self.stage,
                produced: output.stage(),
            });
        }

        match output {
            StageOutput::Outline(items) => self.outline = Some(items),
            StageOutput::RefinedOutline(items) => self.refined_outline = Some(items),
            StageOutput::BlogContent(text) => self.blog_content = Some(text),
        }
        self.stage = self.stage.next();

        Ok(())
    }

    /// Mark pipeline as started
    pub fn start(&mut self) {
        self.status = ExecutionStatus::Running;
        self.started_at.get_or_insert_with(Utc::now);
    }

    /// Mark pipeline as completed
    pub fn complete(&mut self) {
        self.status = ExecutionStatus::Completed;
        self.completed_at = Some(Utc::now());
    }

    /// Mark pipeline as failed
    pub fn fail(&mut self) {
        self.status = ExecutionStatus::Failed;
        self.completed_at = Some(Utc::now());
    }
}
