use crate::app::startup;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory, the configuration file (skipped with
/// `--test`), the SQLite database, and applies all pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let mut cfg = Config::load()?;
    cfg.database = db_path.to_string_lossy().to_string();

    info("⚙️  Initializing rAttendance…");
    info(format!("📄 Config file : {}", Config::config_file().display()));
    info(format!("🗄️  Database   : {}", cfg.database));

    let ctx = startup(cfg)?;

    ttlog_quiet(
        &ctx.pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", ctx.cfg.database),
    );

    success("rAttendance initialization completed!");
    Ok(())
}
