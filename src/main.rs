use anyhow::{anyhow, Context, Result};
use blog_writer::cli::commands::{ConfigCommand, WriteCommand};
use blog_writer::cli::output::*;
use blog_writer::cli::{Cli, Command};
use blog_writer::core::config::{env_lookup, AppConfig, ConfigOverrides};
use blog_writer::{BlogPipeline, ChatCompletionsClient, ExecutionEvent, PipelineState};
use std::path::Path;
use tracing::{error, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials usually live in a .env file next to the project
    dotenvy::dotenv().ok();

    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Write(cmd) => write_post(cmd, &cli).await?,
        Command::Config(cmd) => show_config(cmd, &cli)?,
    }

    Ok(())
}

/// Resolve configuration: file, then environment, then command line
fn load_config(cli: &Cli, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_env(env_lookup)?;
    config.apply_overrides(overrides);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

async fn write_post(cmd: &WriteCommand, cli: &Cli) -> Result<()> {
    let config = load_config(cli, &cmd.overrides())?;

    let api_key = config.api_key(env_lookup).ok_or_else(|| {
        anyhow!(
            "No API key found: set {} in the environment or a .env file",
            config.provider.api_key_env
        )
    })?;
    let client = ChatCompletionsClient::new(config.client_config(Some(api_key)))
        .context("Failed to create completion client")?;

    eprintln!(
        "{} Using model {} (temperature {})",
        INFO,
        style(&config.provider.model).bold(),
        config.provider.temperature
    );

    let spinner = create_spinner();
    let progress = spinner.clone();
    let pipeline = BlogPipeline::with_templates(client, config.prompts.clone())
        .with_event_handler(move |event| match event {
            ExecutionEvent::StageStarted { .. } => {
                progress.set_message(format_execution_event(event));
            }
            ExecutionEvent::PipelineCompleted { .. } => {
                progress.finish_and_clear();
                eprintln!("{}", format_execution_event(event));
            }
            _ => progress.println(format_execution_event(event)),
        });

    let started = std::time::Instant::now();
    let state = match pipeline.generate(cmd.topic.clone()).await {
        Ok(state) => state,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("\n{} {} {}", CROSS, style(&cmd.topic).bold(), style("failed").red());
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if cmd.show_outline {
        print_outlines(&state);
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else if let Some(path) = &cmd.output {
        save_post(&state, path)?;
    } else {
        println!("{}", state.blog_content().unwrap_or_default());
    }

    eprintln!(
        "\n{} Finished in {}",
        CHECK,
        style(format_duration(started.elapsed())).dim()
    );

    Ok(())
}

fn print_outlines(state: &PipelineState) {
    eprintln!();
    eprintln!("{}", format_outline("Outline", state.outline().unwrap_or_default()));
    eprintln!();
    eprintln!(
        "{}",
        format_outline("Refined outline", state.refined_outline().unwrap_or_default())
    );
    eprintln!();
}

fn save_post(state: &PipelineState, path: &Path) -> Result<()> {
    let content = state.blog_content().unwrap_or_default();
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write blog post to {}", path.display()))?;
    eprintln!(
        "{} Blog post saved to {}",
        CHECK,
        style(path.display()).cyan()
    );
    Ok(())
}

fn show_config(cmd: &ConfigCommand, cli: &Cli) -> Result<()> {
    eprintln!("{} Validating configuration...", INFO);

    let config = match load_config(cli, &ConfigOverrides::default()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Validation failed:", CROSS);
            eprintln!("  {}", style(format!("{:#}", e)).red());
            std::process::exit(1);
        }
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let provider = &config.provider;
    println!("{} Configuration is valid!", CHECK);
    match cli.config.as_ref().cloned().or_else(AppConfig::default_path) {
        Some(path) if path.exists() => println!("  File: {}", style(path.display()).dim()),
        _ => println!("  File: {}", style("(defaults)").dim()),
    }
    println!("  Base URL: {}", style(&provider.base_url).cyan());
    println!("  Model: {}", style(&provider.model).bold());
    println!("  Temperature: {}", style(provider.temperature).cyan());
    println!("  Timeout: {}s", style(provider.timeout_secs).cyan());
    match config.api_key(env_lookup) {
        Some(key) => println!(
            "  API key ({}): {}",
            provider.api_key_env,
            style(mask_secret(&key)).dim()
        ),
        None => println!(
            "  {}API key ({}): {}",
            WARN,
            provider.api_key_env,
            style("not set").yellow()
        ),
    }

    Ok(())
}
