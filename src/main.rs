use anyhow::Result;
use clap::{Parser, Subcommand};
use focus_core::config::AppConfig;
use focus_core::normalize::normalize_sessions;
use focus_core::types::SessionRecord;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "focus-insight",
    about = "Descriptive statistics over focus-session history",
    version,
    author
)]
struct Cli {
    /// Path to config file (default: ~/.config/focus-insight/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Bind host
        #[arg(long)]
        host: Option<String>,
        /// Bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Summarize a session file without starting the server
    Analyze {
        /// Path to a JSON file of the form {"sessions": [...]}
        file: PathBuf,
    },

    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Initialize default configuration file
    Init,
    /// Open config file path
    Path,
}

#[derive(Debug, Deserialize)]
struct SessionFile {
    #[serde(default)]
    sessions: Vec<SessionRecord>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "focus_insight=info,warn".into()),
        )
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load config.
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(h) = host {
                config.server.host = h;
            }
            if let Some(p) = port {
                config.server.port = p;
            }
            focus_server::serve(config).await?;
        }
        Some(Commands::Analyze { file }) => {
            analyze_file(&file)?;
        }
        Some(Commands::Config { action }) => {
            handle_config_command(action, &config)?;
        }
        None => {
            focus_server::serve(config).await?;
        }
    }

    Ok(())
}

/// Read a session file and print the text summary of its aggregates.
fn analyze_file(path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)?;
    let file: SessionFile = serde_json::from_str(&contents)?;

    tracing::debug!(
        "Loaded {} sessions from {}",
        file.sessions.len(),
        path.display()
    );

    let table = normalize_sessions(&file.sessions)?;
    print!("{}", focus_analytics::reports::text_summary(&table));
    Ok(())
}

fn handle_config_command(action: Option<ConfigAction>, config: &AppConfig) -> Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{}", toml_str);
        }
        Some(ConfigAction::Init) => {
            let path = AppConfig::default_path();
            if path.exists() {
                println!("Config already exists at: {}", path.display());
            } else {
                config.save()?;
                println!("Created default config at: {}", path.display());
            }
        }
        Some(ConfigAction::Path) => {
            println!("{}", AppConfig::default_path().display());
        }
    }
    Ok(())
}
