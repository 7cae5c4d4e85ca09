use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

/// Handle the `config` subcommand. Runs before the database is opened so a
/// broken configuration can still be checked or edited.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = Config::config_file();

        if *print_config {
            let mut cfg = Config::load()?;
            if let Some(custom_db) = &cli.db {
                cfg.database = custom_db.clone();
            }
            ConfigLogic::print(&cfg)?;
        }

        if *check {
            ConfigLogic::check(&path)?;
        }

        if *migrate {
            ConfigLogic::migrate(&path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}
