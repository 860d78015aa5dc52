//! mediapanel library root.
//! Exposes the CLI parser, the high-level run() function and the component
//! modules: playback controller, codec prober, task tracker, and the
//! platform capability traits they are wired to.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod platform;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Probe { .. } => cli::commands::probe::handle(&cli.command, cfg),
        Commands::Play { .. } => cli::commands::play::handle(&cli.command, cfg),
        Commands::Track { .. } => cli::commands::track::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the configuration once; --config overrides the standard path.
    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
