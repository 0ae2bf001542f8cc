//! blog-writer - outline, refine and write blog posts with a hosted LLM

pub mod cli;
pub mod core;
pub mod execution;
pub mod llm;

// Re-export commonly used types
pub use crate::core::{split_lines, ExecutionStatus, PipelineState, PromptTemplates, Stage, StageOutput};
pub use execution::{BlogPipeline, ExecutionEvent, PipelineError};
pub use llm::{ChatCompletionsClient, ClientConfig, Completion, CompletionClient, CompletionError, Prompt};
