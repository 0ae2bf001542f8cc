//! CLI output formatting

use crate::{
    core::{ExecutionStatus, Stage},
    execution::ExecutionEvent,
    llm::TokenUsage,
};
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "!");
pub static PEN: Emoji<'_, '_> = Emoji("✍️  ", "> ");

/// Create a spinner shown while a stage waits on the model
pub fn create_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Human description of what a stage is doing
pub fn stage_activity(stage: Stage) -> &'static str {
    match stage {
        Stage::Outline => "Drafting outline",
        Stage::Refine => "Refining outline",
        Stage::Write => "Writing blog post",
        Stage::Done => "Done",
    }
}

/// Format an execution status for display
pub fn format_status(status: ExecutionStatus) -> String {
    match status {
        ExecutionStatus::Pending => style("PENDING").dim().to_string(),
        ExecutionStatus::Running => style("RUNNING").yellow().to_string(),
        ExecutionStatus::Completed => style("COMPLETED").green().to_string(),
        ExecutionStatus::Failed => style("FAILED").red().to_string(),
    }
}

fn format_usage(usage: &TokenUsage) -> String {
    format!(
        "{} tokens ({} in / {} out)",
        usage.total_tokens, usage.prompt_tokens, usage.completion_tokens
    )
}

/// Format an execution event for display
pub fn format_execution_event(event: &ExecutionEvent) -> String {
    match event {
        ExecutionEvent::PipelineStarted {
            execution_id,
            topic,
        } => format!(
            "{} Writing about {} ({})",
            PEN,
            style(topic).bold(),
            style(&execution_id.to_string()[..8]).dim()
        ),
        ExecutionEvent::StageStarted { stage } => {
            format!("{}...", stage_activity(*stage))
        }
        ExecutionEvent::StageCompleted {
            stage,
            items,
            usage,
        } => {
            let detail = match stage {
                Stage::Write => "post ready".to_string(),
                _ => format!("{} points", items),
            };
            match usage {
                Some(usage) => format!(
                    "{} {} - {}, {}",
                    CHECK,
                    style(stage).green(),
                    detail,
                    style(format_usage(usage)).dim()
                ),
                None => format!("{} {} - {}", CHECK, style(stage).green(), detail),
            }
        }
        ExecutionEvent::StageFailed { stage, error } => {
            format!("{} {}: {}", CROSS, style(stage).red(), style(error).dim())
        }
        ExecutionEvent::PipelineCompleted {
            execution_id,
            status,
        } => format!(
            "{} Pipeline ({}) {}",
            INFO,
            style(&execution_id.to_string()[..8]).dim(),
            format_status(*status)
        ),
    }
}

/// Format an outline with a heading, one point per line
pub fn format_outline(title: &str, items: &[String]) -> String {
    let mut out = format!("{}", style(title).bold().underlined());
    if items.is_empty() {
        out.push_str(&format!("\n  {}", style("(empty)").dim()));
    }
    for item in items {
        out.push_str("\n  ");
        out.push_str(item);
    }
    out
}

/// Show only the last four characters of a secret
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

/// Format a duration as `42s`, `3m 5s` or `1h 2m 3s`
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
