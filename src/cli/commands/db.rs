use crate::app::AppContext;
use crate::cli::parser::Commands;
use crate::db::migrate::run_pending_migrations;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let conn = &ctx.pool.conn;

    if *migrate {
        info("Running migrations…");
        match run_pending_migrations(conn)? {
            0 => success("Schema already up to date."),
            n => success(format!("Migration completed ({n} applied).")),
        }
    }

    if *show_info {
        stats::print_db_info(&ctx.pool, &ctx.cfg.database)?;
    }

    if *check {
        info("Running integrity check…");

        let integrity: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            success("Integrity check passed.");
        } else {
            error(format!("Integrity check failed: {integrity}"));
        }
    }

    if *vacuum {
        info("Running VACUUM…");
        conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
