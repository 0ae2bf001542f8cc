//! Pipeline execution engine

pub mod engine;
pub mod error;
pub mod executor;

pub use engine::{BlogPipeline, EventHandler, ExecutionEvent};
pub use error::PipelineError;
pub use executor::{StageExecutor, StageResult};
