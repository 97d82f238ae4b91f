use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use parley_agents::{AgentRegistry, DEFAULT_MODEL};
use parley_core::{Provider, ToolRegistry};
use parley_providers::GroqProvider;
use parley_tools::create_tool_registry;

mod chat;
mod config;
mod turn;

use config::Config;

/// Log level for tracing output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Most verbose: routing and wire-level detail
    Trace,
    /// Verbose: LLM requests/responses, tool execution details
    Debug,
    /// Standard: high-level flow
    Info,
    /// Quiet: only warnings and errors
    Warn,
    /// Minimal: only errors
    Error,
}

impl LogLevel {
    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Parser)]
#[command(name = "parley")]
#[command(author, version, about = "Multi-agent chat assistant", long_about = None)]
pub struct Cli {
    /// Prompt to send (one-shot mode; omit for interactive chat)
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Model to use for every agent (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL for the API (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Disable all tools (agents answer from the model alone)
    #[arg(long)]
    pub no_tools: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Enable debug logging (shorthand for --log-level debug)
    #[arg(short, long)]
    pub debug: bool,

    /// Write logs to file (JSON-lines format) instead of stderr
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List agents and the prompts they handle
    Agents,
    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // --debug overrides --log-level
    let log_level = if cli.debug {
        LogLevel::Debug
    } else {
        cli.log_level
    };
    let filter = EnvFilter::new(log_level.as_filter());

    if let Some(log_path) = &cli.log_file {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to create log file: {:?}", log_path))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::sync::Mutex::new(file)))
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = Config::load()?;

    match &cli.command {
        Some(Commands::Agents) => {
            list_agents();
            Ok(())
        }
        Some(Commands::Config) => show_config(&config),
        None => {
            let registry = build_registry(&cli, &config);
            match &cli.prompt {
                Some(prompt) => one_shot(&registry, prompt).await,
                None => chat::ChatSession::new(registry).run().await,
            }
        }
    }
}

/// Wire up provider, tools, and the role map. The registry is complete
/// before the first prompt; a missing API key only surfaces when an agent
/// is actually invoked.
fn build_registry(cli: &Cli, config: &Config) -> AgentRegistry {
    let mut provider = GroqProvider::new(config.resolve_api_key());

    if let Some(model) = cli.model.as_ref().or(config.model.as_ref()) {
        provider = provider.with_default_model(model);
    } else {
        provider = provider.with_default_model(DEFAULT_MODEL);
    }
    if let Some(url) = cli.base_url.as_ref().or(config.base_url.as_ref()) {
        provider = provider.with_base_url(url);
    }

    let tools = if cli.no_tools {
        tracing::debug!("Tools disabled (--no-tools)");
        ToolRegistry::new()
    } else {
        create_tool_registry(config.tools.enable_web, config.tools.enable_transcript)
    };

    let provider: Arc<dyn Provider> = Arc::new(provider);
    AgentRegistry::build(provider, &tools)
}

/// Run a single turn and print the answer, no readline session. Failures
/// have already been rendered as text by the turn layer.
async fn one_shot(registry: &AgentRegistry, prompt: &str) -> Result<()> {
    let outcome = turn::run_turn(registry, prompt).await;
    tracing::info!(
        role = %outcome.role,
        fallback = outcome.used_fallback,
        failed = outcome.failed,
        "Turn finished"
    );
    println!("{}", outcome.text);
    Ok(())
}

fn list_agents() {
    println!("Agents (first matching rule wins):\n");
    for role in parley_agents::AgentRole::all() {
        let profile = role.profile();
        println!("  {:<18} {}", role.name(), profile.summary());
    }
}

fn show_config(config: &Config) -> Result<()> {
    println!("Configuration ({}):", Config::config_path()?.display());
    println!(
        "  API key: {}",
        if config.resolve_api_key().is_empty() {
            "(not set)"
        } else {
            "(configured)"
        }
    );
    println!(
        "  Model: {}",
        config.model.as_deref().unwrap_or(DEFAULT_MODEL)
    );
    if let Some(url) = &config.base_url {
        println!("  Base URL: {}", url);
    }
    println!("  Web search tool: {}", config.tools.enable_web);
    println!("  Transcript tool: {}", config.tools.enable_transcript);
    Ok(())
}
