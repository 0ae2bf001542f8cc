//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{ConfigCommand, WriteCommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Outline, refine and write blog posts with a hosted LLM
#[derive(Debug, Parser, Clone)]
#[command(name = "blog-writer")]
#[command(author = "Blog Writer Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Outline, refine and write blog posts with a hosted LLM", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write a blog post about a topic
    Write(WriteCommand),

    /// Validate and show the effective configuration
    Config(ConfigCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
