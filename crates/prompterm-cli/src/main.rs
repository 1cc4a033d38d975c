use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prompterm_core::{AppConfig, Script};

mod commands;

#[derive(Parser)]
#[command(name = "prompterm")]
#[command(author, version, about = "A terminal teleprompter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Script file to prompt (shorthand for `play`)
    script: Option<PathBuf>,

    /// Scroll speed in rows per second (overrides config)
    #[arg(short, long)]
    speed: Option<f64>,

    /// Font size (overrides config)
    #[arg(short = 'f', long = "font-size")]
    font_size: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the teleprompter
    Play {
        /// Script file to prompt (built-in sample when omitted)
        script: Option<PathBuf>,

        /// Scroll speed in rows per second (overrides config)
        #[arg(short, long)]
        speed: Option<f64>,

        /// Font size (overrides config)
        #[arg(short = 'f', long = "font-size")]
        font_size: Option<f64>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write the default configuration file
    Init,
    /// Print the configuration file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => commands::config::run(action),
        Some(Commands::Play {
            script,
            speed,
            font_size,
        }) => play(script, speed, font_size),
        None => play(cli.script, cli.speed, cli.font_size),
    }
}

fn play(script: Option<PathBuf>, speed: Option<f64>, font_size: Option<f64>) -> Result<()> {
    let mut config = AppConfig::load()?;
    if let Some(speed) = speed {
        config.playback.speed = speed;
    }
    if let Some(font_size) = font_size {
        config.playback.font_size = font_size;
    }
    let config = Arc::new(config);

    init_tracing(&config)?;

    let script = match &script {
        Some(path) => Script::from_path(path)?,
        None => Script::sample(),
    };
    info!(path = ?script.source(), "starting prompter");

    commands::run::run(config, script)
}

/// Initialize logging to a file under the data dir (stdout belongs to the TUI)
fn init_tracing(config: &AppConfig) -> Result<()> {
    std::fs::create_dir_all(config.data_dir())?;
    let log_file = std::fs::File::create(config.log_path())?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        )
        .init();

    Ok(())
}
