//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (store, resolver, ledger workflow, report rendering).

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod token;
pub mod ui;
pub mod utils;

use app::AppContext;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher for every command that works on an open store.
pub fn dispatch(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    match cmd {
        Commands::Init | Commands::Config { .. } => Ok(()),
        Commands::Db { .. } => cli::commands::db::handle(cmd, ctx),
        Commands::Log { .. } => cli::commands::log::handle(cmd, ctx),
        Commands::Backup { .. } => cli::commands::backup::handle(cmd, ctx),
        Commands::Register { .. } => cli::commands::register::handle(cmd, ctx),
        Commands::Students => cli::commands::students::handle(cmd, ctx),
        Commands::Mark { .. } | Commands::Scan { .. } | Commands::CloseDay { .. } => {
            cli::commands::mark::handle(cmd, ctx)
        }
        Commands::List { .. } => cli::commands::list::handle(cmd, ctx),
        Commands::Report { .. } => cli::commands::report::handle(cmd, ctx),
        Commands::Token { .. } | Commands::Pass { .. } => cli::commands::token::handle(cmd, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` and `config` work before (or without) an open store
    match &cli.command {
        Commands::Init => return cli::commands::init::handle(&cli),
        Commands::Config { .. } => return cli::commands::config::handle(&cli),
        _ => {}
    }

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let mut ctx = app::startup(cfg)?;
    dispatch(&cli.command, &mut ctx)
}
