//! CLI command definitions

use crate::core::config::ConfigOverrides;
use clap::Args;
use std::path::PathBuf;

/// Write a blog post
#[derive(Debug, Args, Clone)]
pub struct WriteCommand {
    /// Topic of the blog post
    pub topic: String,

    /// Write the post to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Model identifier (overrides config and environment)
    #[arg(long)]
    pub model: Option<String>,

    /// Sampling temperature (overrides config and environment)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Print the outline and refined outline as well
    #[arg(long)]
    pub show_outline: bool,

    /// Output the final pipeline state as JSON
    #[arg(long, conflicts_with = "output")]
    pub json: bool,
}

impl WriteCommand {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}

/// Validate and show configuration
#[derive(Debug, Args, Clone)]
pub struct ConfigCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
