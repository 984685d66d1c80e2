//! worklog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::NaiveDateTime;
use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Start => commands::start::handle(cfg, now),
        Commands::End => commands::end::handle(cfg, now),
        Commands::Status => commands::status::handle(cfg, now),
        Commands::Report { .. } => commands::report::handle(&cli.command, cfg, now),
        Commands::Remaining { .. } => commands::remaining::handle(&cli.command, cfg, now),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg, now),
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    utils::logging::enable_logging();

    let cli = Cli::parse();

    let mut cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) if cli.command.repairs_config() => {
            ui::messages::warning(format!("{e}; falling back to defaults"));
            Config::default()
        }
        Err(e) => return Err(e),
    };
    if let Some(custom_log) = &cli.log {
        cfg.log_file = custom_log.clone();
    }

    let now = match &cli.now {
        Some(s) => utils::date::parse_now(s)?,
        None => utils::date::now(),
    };
    tracing::debug!(log = %cfg.log_path().display(), %now, "dispatching command");

    dispatch(&cli, &cfg, now)
}
