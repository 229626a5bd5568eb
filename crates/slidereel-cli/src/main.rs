use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use slidereel_core::AppConfig;

mod commands;

use commands::config::ConfigAction;

#[derive(Parser)]
#[command(name = "slidereel")]
#[command(author, version, about = "A terminal carousel with step-by-step and jump navigation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/slidereel/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Run a navigation script headlessly and print notifications as JSON lines
    Simulate {
        /// Mask width
        #[arg(long, default_value_t = 300.0)]
        mask_width: f64,
        /// Item width
        #[arg(long, default_value_t = 100.0)]
        item_width: f64,
        /// Navigate to distant indices one step at a time
        #[arg(long)]
        step_by_step: bool,
        /// Print the final index and strip order after the script
        #[arg(long)]
        state: bool,
        /// Steps: next, prev, tick, goto:N, move:D, key:CODE, page:N, resize:W, mode:step|jump
        #[arg(required = true)]
        script: Vec<String>,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, tui)?;

    let config = Arc::new(config);

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Simulate {
            mask_width,
            item_width,
            step_by_step,
            state,
            script,
        }) => {
            let options = commands::simulate::Options {
                mask_width,
                item_width,
                step_by_step,
                state,
            };
            commands::simulate::run(&config, options, &script)
        }
        Some(Commands::Config { action }) => {
            commands::config::run(&config, cli.config.as_deref(), action)
        }
    }
}

/// `RUST_LOG` wins over the configured level. The TUI logs to a file so
/// output does not tear the alternate screen.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.ui.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let dir = config.data_dir();
        std::fs::create_dir_all(&dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("slidereel.log"))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
