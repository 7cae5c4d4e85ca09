use crate::app::AppContext;
use crate::cli::parser::Commands;
use crate::core::report::{ReportCompiler, ReportLogic, ReportOptions, ReportOutcome};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::parse_optional_date;

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Report {
        date,
        file,
        format,
        force,
    } = cmd
    {
        let date = parse_optional_date(date.as_ref())?;
        let path = ctx.cfg.resolve_output(file);
        let compiler = ReportCompiler::new(ReportOptions::from(&ctx.cfg));

        if let ReportOutcome::Written { rows, .. } =
            ReportLogic::generate(&ctx.pool, &compiler, date, *format, &path, *force)?
        {
            info(format!("{rows} row(s) exported."));
        }
    }

    Ok(())
}
