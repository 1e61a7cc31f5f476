use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use caravel_core::{AppConfig, CarouselConfig};

mod commands;

const DEFAULT_CARD_COUNT: usize = 7;

#[derive(Parser)]
#[command(name = "caravel")]
#[command(version, about = "A responsive card carousel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the carousel TUI
    Run {
        /// Scale breakpoints, gap and swipe threshold to terminal columns
        #[arg(long)]
        compact: bool,
        /// Number of demo cards on the track
        #[arg(long, default_value_t = DEFAULT_CARD_COUNT)]
        cards: usize,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    let command = cli.command.unwrap_or(Commands::Run {
        compact: false,
        cards: DEFAULT_CARD_COUNT,
    });

    match command {
        Commands::Run { compact, cards } => {
            if compact {
                config.carousel = CarouselConfig::compact();
            }
            commands::run::run(Arc::new(config), cards)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init => commands::config::init(),
        },
    }
}
