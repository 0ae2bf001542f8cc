//! Core domain models for the blog pipeline
//!
//! This module defines the pipeline state, the prompt templates for each
//! stage, line splitting of model output, and configuration.

pub mod config;
pub mod lines;
pub mod prompt;
pub mod state;

pub use lines::split_lines;
pub use prompt::{numbered_list, PromptTemplate, PromptTemplates};
pub use state::*;
